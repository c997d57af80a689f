//! Dependent-data loading keyed on the selection context.
//!
//! A screen declares which part of the context its data depends on
//! ([`ScopeRequirement`]). The projected [`ScopeKey`] is what the screen
//! watches: loads re-run only when the key changes, and every load carries a
//! [`LoadTicket`] so a response for a superseded key is dropped.

use contracts::shared::SelectionContext;
use leptos::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeRequirement {
    /// Not scoped (Banco, Entidad EPS).
    Global,
    /// Scoped by the selected company.
    Company,
    /// Scoped by company, payroll run and period.
    Period,
}

/// The slice of the selection a screen's data depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    Global,
    Company {
        company_id: i64,
    },
    Period {
        company_id: i64,
        payroll_run_id: i64,
        period_id: i64,
        ano: i32,
        mes: u32,
    },
}

impl ScopeRequirement {
    /// `None` when the required part of the context is not selected yet.
    pub fn key(self, ctx: &SelectionContext) -> Option<ScopeKey> {
        match self {
            Self::Global => Some(ScopeKey::Global),
            Self::Company => ctx.company_id().map(|company_id| ScopeKey::Company { company_id }),
            Self::Period => ctx.selection().map(|s| ScopeKey::Period {
                company_id: s.company.id,
                payroll_run_id: s.payroll_run.id,
                period_id: s.period.id,
                ano: s.period.ano,
                mes: s.period.mes,
            }),
        }
    }
}

impl ScopeKey {
    pub fn company_id(&self) -> Option<i64> {
        match self {
            Self::Global => None,
            Self::Company { company_id } | Self::Period { company_id, .. } => Some(*company_id),
        }
    }
}

/// Build `path?query` from a serializable filter.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        Ok(_) => path.to_string(),
        Err(e) => {
            log::warn!("Could not encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    pub scope: ScopeKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPlan {
    /// Scope unset: show an empty list, issue no request.
    Clear,
    Fetch(LoadTicket),
}

#[derive(Debug, Clone, Default)]
pub struct DependentLoader {
    generation: u64,
    scope: Option<ScopeKey>,
}

impl DependentLoader {
    /// Start a load for `scope`. Every call invalidates all earlier tickets.
    pub fn begin(&mut self, scope: Option<ScopeKey>) -> LoadPlan {
        self.generation += 1;
        self.scope = scope.clone();
        match scope {
            None => LoadPlan::Clear,
            Some(scope) => LoadPlan::Fetch(LoadTicket {
                generation: self.generation,
                scope,
            }),
        }
    }

    /// Reload the current scope (after a create/update/delete).
    pub fn refresh(&mut self) -> LoadPlan {
        let scope = self.scope.clone();
        self.begin(scope)
    }

    /// Whether a response for `ticket` may still be applied.
    pub fn accepts(&self, ticket: &LoadTicket) -> bool {
        let current = ticket.generation == self.generation;
        if !current {
            log::debug!(
                "Discarding stale response (generation {} < {})",
                ticket.generation,
                self.generation
            );
        }
        current
    }

    pub fn scope(&self) -> Option<&ScopeKey> {
        self.scope.as_ref()
    }
}

/// Ticket check for a response that arrives after an `await`.
///
/// The screen owning `loader` may have been unmounted in the meantime; a
/// disposed loader accepts nothing.
pub fn accepts_late(loader: StoredValue<DependentLoader>, ticket: &LoadTicket) -> bool {
    loader.try_with_value(|l| l.accepts(ticket)).unwrap_or(false)
}

/// [`DependentLoader::refresh`] on a loader that may already be disposed.
pub fn refresh_stored(loader: StoredValue<DependentLoader>) -> Option<LoadPlan> {
    loader.try_update_value(|l| l.refresh())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{CompanyRef, PayrollRunRef, PeriodRef, Selection};
    use leptos::reactive::owner::Owner;
    use leptos::reactive::traits::Dispose;
    use serde::Serialize;

    fn ctx(company: i64, period: i64) -> SelectionContext {
        Selection {
            company: CompanyRef {
                id: company,
                name: format!("Empresa {}", company),
            },
            payroll_run: PayrollRunRef {
                id: 5,
                name: "Main".into(),
            },
            period: PeriodRef::new(period, 2024, 3, 1),
        }
        .into()
    }

    fn ticket(plan: LoadPlan) -> LoadTicket {
        match plan {
            LoadPlan::Fetch(t) => t,
            LoadPlan::Clear => panic!("expected a fetch"),
        }
    }

    #[test]
    fn test_empty_context_issues_no_query() {
        let empty = SelectionContext::empty();
        assert_eq!(ScopeRequirement::Company.key(&empty), None);
        assert_eq!(ScopeRequirement::Period.key(&empty), None);
        assert_eq!(ScopeRequirement::Global.key(&empty), Some(ScopeKey::Global));

        let mut loader = DependentLoader::default();
        assert_eq!(loader.begin(ScopeRequirement::Company.key(&empty)), LoadPlan::Clear);
    }

    #[test]
    fn test_company_scope_ignores_period_changes() {
        let a = ScopeRequirement::Company.key(&ctx(10, 100));
        let b = ScopeRequirement::Company.key(&ctx(10, 101));
        assert_eq!(a, b);

        let a = ScopeRequirement::Period.key(&ctx(10, 100));
        let b = ScopeRequirement::Period.key(&ctx(10, 101));
        assert_ne!(a, b);
    }

    #[test]
    fn test_last_committed_context_wins() {
        let mut loader = DependentLoader::default();
        let first = ticket(loader.begin(ScopeRequirement::Company.key(&ctx(1, 100))));
        let second = ticket(loader.begin(ScopeRequirement::Company.key(&ctx(2, 100))));

        // the response for company 1 arrives last and must be ignored
        assert!(loader.accepts(&second));
        assert!(!loader.accepts(&first));
        assert_eq!(second.scope.company_id(), Some(2));
    }

    #[test]
    fn test_refresh_keeps_scope_and_invalidates() {
        let mut loader = DependentLoader::default();
        let first = ticket(loader.begin(Some(ScopeKey::Company { company_id: 10 })));
        let again = ticket(loader.refresh());
        assert_eq!(again.scope, first.scope);
        assert!(!loader.accepts(&first));
        assert!(loader.accepts(&again));

        loader.begin(None);
        assert_eq!(loader.refresh(), LoadPlan::Clear);
        assert_eq!(loader.scope(), None);
    }

    #[test]
    fn test_unmounted_loader_rejects_late_tickets() {
        let owner = Owner::new();
        let loader = owner.with(|| StoredValue::new(DependentLoader::default()));
        let pending = loader
            .try_update_value(|l| l.begin(Some(ScopeKey::Company { company_id: 10 })))
            .map(ticket)
            .unwrap();
        assert!(accepts_late(loader, &pending));

        loader.dispose();
        assert!(!accepts_late(loader, &pending));
        assert_eq!(refresh_stored(loader), None);
    }

    #[test]
    fn test_with_query() {
        #[derive(Serialize)]
        struct Filter {
            #[serde(rename = "empresaId")]
            company_id: i64,
        }
        assert_eq!(with_query("/contrato-laboral/", &Filter { company_id: 10 }), "/contrato-laboral/?empresaId=10");
    }
}
