//! First-run provisioning
//!
//! Idempotent: the settings row and each bootstrap engine are only inserted
//! when absent, so running it on every start is safe.

use super::defaults;
use super::repository::{SearchEngineRepository, SettingsRepository};
use crate::contract::NavPanelError;
use chrono::Utc;

/// Outcome of a provisioning run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Provisioned {
    pub settings_created: bool,
    pub engines_created: usize,
}

/// Insert the default settings row and, if `seed_engines`, the bootstrap engines
pub async fn provision(
    settings_repo: &dyn SettingsRepository,
    engine_repo: &dyn SearchEngineRepository,
    seed_engines: bool,
) -> Result<Provisioned, NavPanelError> {
    let mut outcome = Provisioned::default();

    let record = defaults::settings_record(Utc::now())?;
    outcome.settings_created = settings_repo
        .insert_if_absent(&record)
        .await
        .map_err(NavPanelError::store)?;

    if seed_engines {
        let existing = engine_repo.list_all().await.map_err(NavPanelError::store)?;
        // Never steal the flag from an engine the user chose
        let mut has_default = existing.iter().any(|engine| engine.is_default);

        for mut engine in defaults::bootstrap_search_engines() {
            if existing.iter().any(|stored| stored.id == engine.id) {
                continue;
            }
            if has_default {
                engine.is_default = false;
            }
            has_default |= engine.is_default;

            engine_repo
                .create(&engine)
                .await
                .map_err(NavPanelError::store)?;
            outcome.engines_created += 1;
        }
    }

    tracing::info!(
        settings_created = outcome.settings_created,
        engines_created = outcome.engines_created,
        "nav panel store provisioned"
    );
    Ok(outcome)
}
