//! Selector dialog state, free of any IO.
//!
//! The component feeds catalog responses in and performs the period requests
//! this state asks for. Company and payroll-run lists arrive independently;
//! the period list is requested once both are chosen and is matched to its
//! request by ticket.

use contracts::shared::{
    CompanyOption, CompanyRef, PayrollRunOption, PayrollRunRef, PeriodOption, PeriodRef, Selection,
    SelectionContext,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Seleccione empresa, nómina y periodo.")]
    Incomplete,
    #[error("El periodo seleccionado no pertenece a la empresa y nómina elegidas.")]
    UnknownPeriod,
}

/// A period list the component has to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRequest {
    pub ticket: u64,
    pub company_id: i64,
    pub payroll_run_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorState {
    pub companies: Vec<CompanyOption>,
    pub payroll_runs: Vec<PayrollRunOption>,
    pub periods: Vec<PeriodOption>,
    pub company_id: Option<i64>,
    pub payroll_run_id: Option<i64>,
    pub period_id: Option<i64>,
    companies_loaded: bool,
    runs_loaded: bool,
    period_ticket: u64,
    periods_pending: bool,
}

/// Keep `preferred` when the list has it, else the first id.
fn pick<T>(items: &[T], preferred: Option<i64>, id: impl Fn(&T) -> i64) -> Option<i64> {
    preferred
        .filter(|p| items.iter().any(|i| id(i) == *p))
        .or_else(|| items.first().map(&id))
}

impl SelectorState {
    /// Fresh dialog, pre-selecting the store's current choice.
    pub fn open(current: &SelectionContext) -> Self {
        Self {
            company_id: current.company_id(),
            payroll_run_id: current.payroll_run().map(|r| r.id),
            period_id: current.period().map(|p| p.id),
            ..Self::default()
        }
    }

    pub fn apply_companies(&mut self, companies: Vec<CompanyOption>) -> Option<PeriodRequest> {
        log::debug!("Selector: {} companies", companies.len());
        self.company_id = pick(&companies, self.company_id, |c| c.id);
        self.companies = companies;
        self.companies_loaded = true;
        self.request_periods()
    }

    pub fn apply_payroll_runs(&mut self, runs: Vec<PayrollRunOption>) -> Option<PeriodRequest> {
        log::debug!("Selector: {} payroll runs", runs.len());
        self.payroll_run_id = pick(&runs, self.payroll_run_id, |r| r.id);
        self.payroll_runs = runs;
        self.runs_loaded = true;
        self.request_periods()
    }

    pub fn select_company(&mut self, id: Option<i64>) -> Option<PeriodRequest> {
        self.company_id = id.filter(|id| self.companies.iter().any(|c| c.id == *id));
        self.request_periods()
    }

    pub fn select_payroll_run(&mut self, id: Option<i64>) -> Option<PeriodRequest> {
        self.payroll_run_id = id.filter(|id| self.payroll_runs.iter().any(|r| r.id == *id));
        self.request_periods()
    }

    pub fn select_period(&mut self, id: Option<i64>) {
        self.period_id = id.filter(|id| self.periods.iter().any(|p| p.id == *id));
    }

    /// New period request for the current pair. Any in-flight request is
    /// superseded; the previously chosen period is kept as preference.
    fn request_periods(&mut self) -> Option<PeriodRequest> {
        self.period_ticket += 1;
        self.periods.clear();
        if !(self.companies_loaded && self.runs_loaded) {
            return None;
        }
        match (self.company_id, self.payroll_run_id) {
            (Some(company_id), Some(payroll_run_id)) => {
                self.periods_pending = true;
                Some(PeriodRequest {
                    ticket: self.period_ticket,
                    company_id,
                    payroll_run_id,
                })
            }
            _ => {
                self.periods_pending = false;
                self.period_id = None;
                None
            }
        }
    }

    /// Apply a period list. Returns `false` when the response is stale.
    pub fn apply_periods(&mut self, ticket: u64, periods: Vec<PeriodOption>) -> bool {
        if ticket != self.period_ticket {
            log::debug!("Selector: stale period list (ticket {}) ignored", ticket);
            return false;
        }
        log::debug!("Selector: {} periods", periods.len());
        self.period_id = pick(&periods, self.period_id, |p| p.id);
        self.periods = periods;
        self.periods_pending = false;
        true
    }

    /// Period load failed: the list stays empty.
    pub fn periods_failed(&mut self, ticket: u64) -> bool {
        self.apply_periods(ticket, Vec::new())
    }

    pub fn is_loading_periods(&self) -> bool {
        self.periods_pending
    }

    pub fn can_commit(&self) -> bool {
        self.commit().is_ok()
    }

    /// Build the selection to hand to the store.
    pub fn commit(&self) -> Result<Selection, SelectorError> {
        let (Some(company_id), Some(run_id), Some(period_id)) =
            (self.company_id, self.payroll_run_id, self.period_id)
        else {
            return Err(SelectorError::Incomplete);
        };
        if self.periods_pending {
            return Err(SelectorError::Incomplete);
        }
        let company = self
            .companies
            .iter()
            .find(|c| c.id == company_id)
            .ok_or(SelectorError::Incomplete)?;
        let run = self
            .payroll_runs
            .iter()
            .find(|r| r.id == run_id)
            .ok_or(SelectorError::Incomplete)?;
        let period = self
            .periods
            .iter()
            .find(|p| p.id == period_id)
            .ok_or(SelectorError::UnknownPeriod)?;
        Ok(Selection {
            company: CompanyRef::from(company),
            payroll_run: PayrollRunRef::from(run),
            period: PeriodRef::from(period),
        })
    }
}
