//! Generic entity screen
//!
//! Every maintenance screen is the same machine: rows and lookups keyed on a
//! [`ScopeKey`], the table engine, and one payload builder. Only the
//! [`EntityScreenDef`] differs per entity.

use std::collections::{BTreeMap, HashMap};

use contracts::shared::{FormError, FormValues, LookupRow, Row, SaveMode, SelectionContext};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::layout::selection_store::use_selection;
use crate::shared::dependent_loader::{
    accepts_late, refresh_stored, with_query, DependentLoader, LoadPlan, LoadTicket, ScopeKey,
    ScopeRequirement,
};
use crate::shared::http::{self, ApiError};
use crate::shared::notify::{report_failure, Notice, NotificationService, Notify};
use crate::shared::table_engine::{Column, FormState, SaveAction, TableGlobal};

/// Loaded lookups by name (`"situacion"`, `"trabajador"`, ...).
pub type Combos = HashMap<&'static str, Vec<LookupRow>>;

/// Lookup rows by name; an unloaded lookup is an empty list.
pub fn combo(combos: &Combos, name: &str) -> Vec<LookupRow> {
    combos.get(name).cloned().unwrap_or_default()
}

/// `path?{param}={company_id}`
pub fn company_query(path: &str, param: &str, company_id: i64) -> String {
    with_query(path, &BTreeMap::from([(param, company_id)]))
}

/// One `GET /{entity}-combos/{lookup}` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboSpec {
    pub name: &'static str,
    pub path: &'static str,
    /// Query parameter carrying the company id; `None` for lookups shared by all companies
    pub company_param: Option<&'static str>,
}

impl ComboSpec {
    pub const fn global(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            company_param: None,
        }
    }

    pub const fn per_company(
        name: &'static str,
        path: &'static str,
        company_param: &'static str,
    ) -> Self {
        Self {
            name,
            path,
            company_param: Some(company_param),
        }
    }

    pub fn is_scoped(&self) -> bool {
        self.company_param.is_some()
    }

    /// Request path; `None` when the lookup needs a company that is not selected.
    pub fn url(&self, scope: Option<&ScopeKey>) -> Option<String> {
        match self.company_param {
            None => Some(self.path.to_string()),
            Some(param) => scope
                .and_then(ScopeKey::company_id)
                .map(|id| company_query(self.path, param, id)),
        }
    }
}

/// Static description of one maintenance screen.
pub struct EntityScreenDef {
    /// Sidebar / active-screen key
    pub key: &'static str,
    pub title: &'static str,
    /// REST resource (`/{resource}/`, `/{resource}/{id}`)
    pub resource: &'static str,
    pub scope: ScopeRequirement,
    pub delete_prompt: &'static str,
    pub list_path: fn(&ScopeKey) -> String,
    pub combos: &'static [ComboSpec],
    pub columns: fn(&Combos) -> Vec<Column>,
    /// Form fields when they differ from the table (locked context fields)
    pub modal_columns: Option<fn(&Combos, &SelectionContext) -> Vec<Column>>,
    pub build_payload: fn(FormValues<'_>, &SelectionContext, SaveMode) -> Result<Value, FormError>,
}

/// Request a submitted form turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create { path: String, body: Value },
    Update { path: String, body: Value },
}

impl EntityScreenDef {
    pub fn collection_path(&self) -> String {
        format!("/{}/", self.resource)
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("/{}/{}", self.resource, id)
    }

    pub fn form_columns(&self, combos: &Combos, ctx: &SelectionContext) -> Vec<Column> {
        match self.modal_columns {
            Some(build) => build(combos, ctx),
            None => (self.columns)(combos),
        }
    }

    /// Validate and normalize the form values. Nothing is sent on error.
    pub fn prepare_save(
        &self,
        action: &SaveAction,
        ctx: &SelectionContext,
    ) -> Result<SaveRequest, FormError> {
        match action {
            SaveAction::Create(values) => Ok(SaveRequest::Create {
                path: self.collection_path(),
                body: (self.build_payload)(FormValues::new(values), ctx, SaveMode::Create)?,
            }),
            SaveAction::Update { id, values } => {
                // the edited id always follows the URL, whatever the form holds
                let mut values = values.clone();
                values.insert("PKID".to_string(), Value::from(*id));
                Ok(SaveRequest::Update {
                    path: self.item_path(*id),
                    body: (self.build_payload)(FormValues::new(&values), ctx, SaveMode::Update)?,
                })
            }
        }
    }
}

/// What a finished row fetch does to the screen.
#[derive(Debug, PartialEq)]
enum RowsOutcome {
    /// Superseded or unmounted: leave the screen alone.
    Stale,
    Loaded(Vec<Row>),
    /// Rows are cleared and the message reported.
    Failed(String),
}

fn settle_rows(current: bool, result: Result<Vec<Row>, ApiError>) -> RowsOutcome {
    if !current {
        return RowsOutcome::Stale;
    }
    match result {
        Ok(list) => RowsOutcome::Loaded(list),
        Err(e) => RowsOutcome::Failed(format!(
            "No se pudieron cargar los registros.\n{}",
            e.user_message()
        )),
    }
}

#[component]
pub fn EntityScreen(def: &'static EntityScreenDef) -> impl IntoView {
    let selection = use_selection();
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    // Reloads only when the part of the context this screen uses changes
    let scope = Memo::new(move |_| selection.signal().with(|ctx| def.scope.key(ctx)));

    let rows = RwSignal::new(Vec::<Row>::new());
    let combos = RwSignal::new(Combos::new());
    let loading = RwSignal::new(false);
    let form = RwSignal::new(FormState::default());

    let rows_loader = StoredValue::new(DependentLoader::default());
    let combo_loader = StoredValue::new(DependentLoader::default());

    let fetch_rows = move |plan: LoadPlan| match plan {
        LoadPlan::Clear => {
            rows.set(Vec::new());
            loading.set(false);
        }
        LoadPlan::Fetch(ticket) => {
            loading.set(true);
            let path = (def.list_path)(&ticket.scope);
            spawn_local(async move {
                let result = http::get_json::<Vec<Row>>(&path).await;
                match settle_rows(accepts_late(rows_loader, &ticket), result) {
                    RowsOutcome::Stale => {}
                    RowsOutcome::Loaded(list) => {
                        loading.set(false);
                        rows.set(list);
                    }
                    RowsOutcome::Failed(message) => {
                        loading.set(false);
                        rows.set(Vec::new());
                        report_failure(&notifications, def.title, message);
                    }
                }
            });
        }
    };

    let fetch_combo = move |spec: ComboSpec, path: String, ticket: Option<LoadTicket>| {
        spawn_local(async move {
            let result = http::get_json::<Vec<LookupRow>>(&path).await;
            if let Some(ticket) = &ticket {
                if !accepts_late(combo_loader, ticket) {
                    return;
                }
            }
            match result {
                Ok(list) => combos.update(|c| {
                    c.insert(spec.name, list);
                }),
                Err(e) => {
                    combos.update(|c| {
                        c.remove(spec.name);
                    });
                    report_failure(
                        &notifications,
                        def.title,
                        format!("No se pudieron cargar los combos.\n{}", e.user_message()),
                    );
                }
            }
        });
    };

    let refresh = move || {
        if let Some(plan) = refresh_stored(rows_loader) {
            fetch_rows(plan);
        }
    };

    // Global lookups do not depend on the context: fetched once on open
    for spec in def.combos.iter().filter(|s| !s.is_scoped()) {
        fetch_combo(*spec, spec.path.to_string(), None);
    }

    Effect::new(move |_| {
        let key = scope.get();
        form.update(|f| f.reset());

        let mut combo_plan = LoadPlan::Clear;
        combo_loader.update_value(|l| combo_plan = l.begin(key.clone()));
        let scoped = def.combos.iter().filter(|s| s.is_scoped());
        match combo_plan {
            LoadPlan::Clear => combos.update(|c| {
                for spec in scoped {
                    c.remove(spec.name);
                }
            }),
            LoadPlan::Fetch(ticket) => {
                for spec in scoped {
                    if let Some(path) = spec.url(Some(&ticket.scope)) {
                        fetch_combo(*spec, path, Some(ticket.clone()));
                    }
                }
            }
        }

        let mut plan = LoadPlan::Clear;
        rows_loader.update_value(|l| plan = l.begin(key));
        fetch_rows(plan);
    });

    let columns = Signal::derive(move || combos.with(|c| (def.columns)(c)));
    let modal_columns = Signal::derive(move || {
        let ctx = selection.read();
        combos.with(|c| def.form_columns(c, &ctx))
    });

    let on_save = Callback::new(move |action: SaveAction| {
        let request = match def.prepare_save(&action, &selection.read_untracked()) {
            Ok(request) => request,
            Err(e) => {
                report_failure(&notifications, def.title, e.to_string());
                return;
            }
        };
        spawn_local(async move {
            let result = match &request {
                SaveRequest::Create { path, body } => http::post_json(path, body).await,
                SaveRequest::Update { path, body } => http::put_json(path, body).await,
            };
            match result {
                Ok(_) => {
                    form.update(|f| f.close());
                    notifications.notify(Notice::info("Registro guardado"));
                    refresh();
                }
                Err(e) => report_failure(
                    &notifications,
                    def.title,
                    format!("No se pudo guardar el registro.\n{}", e.user_message()),
                ),
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        let path = def.item_path(id);
        spawn_local(async move {
            match http::delete(&path).await {
                Ok(()) => {
                    notifications.notify(Notice::info("Registro eliminado"));
                    refresh();
                }
                Err(e) => report_failure(
                    &notifications,
                    def.title,
                    format!("No se pudo eliminar el registro.\n{}", e.user_message()),
                ),
            }
        });
    });

    let scope_missing = Signal::derive(move || scope.with(|s| s.is_none()));

    view! {
        <div class="page">
            <Show when=move || scope_missing.get()>
                <div class="page__hint">
                    {match def.scope {
                        ScopeRequirement::Period => "Seleccione empresa, nómina y periodo en el Selector de Contexto.",
                        _ => "Seleccione empresa en el Selector de Contexto.",
                    }}
                </div>
            </Show>
            <TableGlobal
                title=def.title
                rows=rows
                columns=columns
                modal_columns=modal_columns
                form=form
                loading=loading
                can_add=Signal::derive(move || !scope_missing.get())
                delete_prompt=def.delete_prompt
                on_save=on_save
                on_delete=on_delete
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{CompanyRef, PayrollRunRef, PeriodRef, Selection};
    use serde_json::json;

    fn sample_columns(_: &Combos) -> Vec<Column> {
        vec![Column::number("IDBanco", "ID"), Column::text("Banco", "Banco")]
    }

    fn sample_payload(
        form: FormValues<'_>,
        _: &SelectionContext,
        mode: SaveMode,
    ) -> Result<Value, FormError> {
        Ok(json!({
            "IDBanco": form.required_i64("IDBanco", "ID Banco")?,
            "create": mode == SaveMode::Create,
        }))
    }

    fn sample_list(_: &ScopeKey) -> String {
        "/banco/".to_string()
    }

    static SAMPLE: EntityScreenDef = EntityScreenDef {
        key: "sample",
        title: "Sample",
        resource: "banco",
        scope: ScopeRequirement::Global,
        delete_prompt: "¿Eliminar?",
        list_path: sample_list,
        combos: &[],
        columns: sample_columns,
        modal_columns: None,
        build_payload: sample_payload,
    };

    fn values(v: Value) -> Row {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_prepare_create_and_update() {
        let ctx = SelectionContext::empty();
        let create = SAMPLE
            .prepare_save(&SaveAction::Create(values(json!({"IDBanco": "7"}))), &ctx)
            .unwrap();
        assert_eq!(
            create,
            SaveRequest::Create {
                path: "/banco/".into(),
                body: json!({"IDBanco": 7, "create": true}),
            }
        );

        let update = SAMPLE
            .prepare_save(
                &SaveAction::Update {
                    id: 3,
                    values: values(json!({"IDBanco": 7})),
                },
                &ctx,
            )
            .unwrap();
        assert_eq!(
            update,
            SaveRequest::Update {
                path: "/banco/3".into(),
                body: json!({"IDBanco": 7, "create": false}),
            }
        );
    }

    #[test]
    fn test_validation_failure_sends_nothing() {
        let err = SAMPLE
            .prepare_save(
                &SaveAction::Create(values(json!({"IDBanco": ""}))),
                &SelectionContext::empty(),
            )
            .unwrap_err();
        assert_eq!(err, FormError::Required { field: "ID Banco" });
    }

    #[test]
    fn test_form_columns_fall_back_to_table() {
        let cols = SAMPLE.form_columns(&Combos::new(), &SelectionContext::empty());
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].key, "IDBanco");
    }

    #[test]
    fn test_combo_urls() {
        let global = ComboSpec::global("situacion", "/banco-combos/situaciones");
        assert_eq!(global.url(None).as_deref(), Some("/banco-combos/situaciones"));

        let scoped = ComboSpec::per_company(
            "trabajador",
            "/contrato-laboral-combos/trabajador/",
            "empresaId",
        );
        assert!(scoped.is_scoped());
        assert_eq!(scoped.url(None), None);
        assert_eq!(scoped.url(Some(&ScopeKey::Global)), None);

        let ctx: SelectionContext = Selection {
            company: CompanyRef {
                id: 10,
                name: "ACME".into(),
            },
            payroll_run: PayrollRunRef {
                id: 5,
                name: "Main".into(),
            },
            period: PeriodRef::new(100, 2024, 3, 1),
        }
        .into();
        let key = ScopeRequirement::Company.key(&ctx);
        assert_eq!(
            scoped.url(key.as_ref()).as_deref(),
            Some("/contrato-laboral-combos/trabajador/?empresaId=10")
        );
    }

    #[test]
    fn test_combo_lookup_defaults_to_empty() {
        let mut combos = Combos::new();
        assert!(combo(&combos, "situacion").is_empty());
        combos.insert("situacion", vec![values(json!({"PKID": 1, "SituacionRegistro": "Activo"}))]);
        assert_eq!(combo(&combos, "situacion").len(), 1);
    }

    fn company_ticket(loader: &mut DependentLoader, company_id: i64) -> LoadTicket {
        match loader.begin(Some(ScopeKey::Company { company_id })) {
            LoadPlan::Fetch(ticket) => ticket,
            LoadPlan::Clear => panic!("expected a fetch"),
        }
    }

    #[test]
    fn test_company_switch_drops_pending_rows() {
        let mut loader = DependentLoader::default();
        let for_10 = company_ticket(&mut loader, 10);
        let for_20 = company_ticket(&mut loader, 20);

        // company 20 answers first
        let rows = match settle_rows(loader.accepts(&for_20), Ok(vec![values(json!({"PKID": 20}))])) {
            RowsOutcome::Loaded(list) => list,
            other => panic!("unexpected {:?}", other),
        };

        // then the late answer for company 10, success or failure alike
        let late = settle_rows(loader.accepts(&for_10), Ok(vec![values(json!({"PKID": 10}))]));
        assert_eq!(late, RowsOutcome::Stale);
        let late = settle_rows(loader.accepts(&for_10), Err(ApiError::Network("timeout".into())));
        assert_eq!(late, RowsOutcome::Stale);
        assert_eq!(rows, vec![values(json!({"PKID": 20}))]);
    }

    #[test]
    fn test_rows_after_unmount_are_stale() {
        use leptos::reactive::owner::Owner;
        use leptos::reactive::traits::Dispose;

        let owner = Owner::new();
        let loader = owner.with(|| StoredValue::new(DependentLoader::default()));
        let pending = loader
            .try_update_value(|l| company_ticket(l, 10))
            .unwrap();

        loader.dispose();
        let outcome = settle_rows(accepts_late(loader, &pending), Ok(Vec::new()));
        assert_eq!(outcome, RowsOutcome::Stale);
    }

    #[test]
    fn test_failed_load_reports_server_detail() {
        let error = ApiError::from_status(422, r#"{"detail": "PKIDEmpresa requerido"}"#);
        match settle_rows(true, Err(error)) {
            RowsOutcome::Failed(message) => {
                assert!(message.starts_with("No se pudieron cargar los registros."));
                assert!(message.contains("PKIDEmpresa requerido"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
