use dioxus::prelude::*;
use std::future::Future;

/// Spawns request futures in the scope that owns the dashboard view-models.
///
/// A request keeps running when the tab that issued it unmounts, so the
/// matching `receive` / `finish` call always lands. Requests still die with
/// the dashboard itself, together with the state they would write to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardTasks {
    scope: ScopeId,
}

impl DashboardTasks {
    pub fn spawn(self, fut: impl Future<Output = ()> + 'static) {
        if self.scope.push_future(fut).is_none() {
            tracing::warn!("dashboard closed before the request started");
        }
    }
}

/// Register the calling component as the owner of dashboard requests.
pub fn use_dashboard_tasks_provider() -> DashboardTasks {
    use_context_provider(|| DashboardTasks {
        scope: current_scope_id().unwrap_or(ScopeId::ROOT),
    })
}

pub fn use_dashboard_tasks() -> DashboardTasks {
    use_context::<DashboardTasks>()
}
