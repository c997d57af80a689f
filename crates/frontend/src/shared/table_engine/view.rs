use contracts::shared::Row;
use leptos::prelude::*;
use thaw::*;

use super::engine::{FormMode, FormState, ListState, SaveAction};
use super::schema::{Column, ColumnType, SelectSource};
use crate::layout::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;

/// Generic CRUD table with add/edit form and delete confirmation.
///
/// The table only mirrors `rows`; saving and deleting are delegated to the
/// owning screen through `on_save` / `on_delete`. The screen also owns `form`
/// so it can close it after a successful request.
#[component]
pub fn TableGlobal(
    #[prop(into)] title: String,
    #[prop(into)] rows: Signal<Vec<Row>>,
    #[prop(into)] columns: Signal<Vec<Column>>,
    /// Form fields; the table columns when absent
    #[prop(optional, into)]
    modal_columns: Option<Signal<Vec<Column>>>,
    form: RwSignal<FormState>,
    #[prop(into)] loading: Signal<bool>,
    /// "Agregar" is offered only when true (scope selected)
    #[prop(into)]
    can_add: Signal<bool>,
    #[prop(into)] delete_prompt: String,
    on_save: Callback<SaveAction>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let modal_columns = modal_columns.unwrap_or(columns);
    let page_size = config().page_size;
    let max_visible = config().max_visible_pages;

    let list = RwSignal::new(ListState::default());

    let page = Memo::new(move |_| {
        let mut state = list.get();
        let cols = columns.get();
        rows.with(|data| {
            let (visible, slice) = state.visible(data, &cols, page_size);
            (visible.into_iter().cloned().collect::<Vec<Row>>(), slice)
        })
    });

    // Keep the stored page in range when the filtered list shrinks
    Effect::new(move |_| {
        let effective = page.with(|(_, slice)| slice.page);
        if list.with_untracked(|l| l.page) != effective {
            list.update(|l| l.go_to(effective));
        }
    });

    let slice = Signal::derive(move || page.with(|(_, s)| *s));

    let open_add = move |_: leptos::ev::MouseEvent| {
        let cols = modal_columns.get_untracked();
        form.update(|f| f.open_add(&cols));
    };

    let handle_save = move |_: leptos::ev::MouseEvent| {
        if let Some(action) = form.with_untracked(|f| f.save()) {
            on_save.run(action);
        }
    };

    let handle_cancel = move |_: leptos::ev::MouseEvent| form.update(|f| f.close());

    let confirm_delete = move |_: leptos::ev::MouseEvent| {
        if let Some(id) = form.try_update(|f| f.confirm_delete()).flatten() {
            on_delete.run(id);
        }
    };

    let cancel_delete = move |_: leptos::ev::MouseEvent| form.update(|f| f.cancel_delete());

    let form_title = {
        let title = title.clone();
        Memo::new(move |_| match form.with(|f| f.mode.clone()) {
            FormMode::Edit { .. } => format!("Editar {}", title),
            _ => format!("Agregar {}", title),
        })
    };

    // Memos: typing in the form must not re-open the dialog
    let form_open = Memo::new(move |_| form.with(|f| f.is_open()));
    let delete_pending = Memo::new(move |_| form.with(|f| f.pending_delete().is_some()));

    view! {
        <div class="table-global">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title.clone()}</h1>
                    <Badge>{move || slice.get().total.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || list.with(|l| l.query.clone()))
                        on_change=Callback::new(move |q: String| list.update(|l| l.set_query(q)))
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=open_add
                        disabled=Signal::derive(move || !can_add.get())
                    >
                        {icon("plus")}
                        " Agregar"
                    </Button>
                </div>
            </div>

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            {move || columns.get().into_iter().map(|col| view! {
                                <th class="table__header-cell">{col.label}</th>
                            }).collect_view()}
                            <th class="table__header-cell table__header-cell--actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let cols = columns.get();
                            let span = (cols.len() + 1).to_string();
                            if loading.get() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=span>"Cargando..."</td></tr>
                                }.into_any();
                            }
                            let (visible, _) = page.get();
                            if visible.is_empty() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=span>"Sin registros"</td></tr>
                                }.into_any();
                            }
                            visible
                                .into_iter()
                                .map(|row| table_row(row, &cols, modal_columns, form))
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="table-footer">
                <span class="table-footer__summary">{move || slice.get().summary()}</span>
                <PaginationControls
                    current_page=Signal::derive(move || slice.get().page)
                    total_pages=Signal::derive(move || slice.get().total_pages)
                    pages=Signal::derive(move || slice.get().window(max_visible))
                    on_page_change=Callback::new(move |p: usize| list.update(|l| l.go_to(p)))
                />
            </div>

            <Modal
                open=form_open
                title=form_title
                on_close=Callback::new(move |_| form.update(|f| f.close()))
            >
                <div class="form-grid">
                    {move || modal_columns.get().into_iter().map(|col| form_field(col, form)).collect_view()}
                </div>
                <div class="modal-actions">
                    <Space>
                        <Button appearance=ButtonAppearance::Secondary on_click=handle_cancel>
                            "Cancelar"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                            "Guardar"
                        </Button>
                    </Space>
                </div>
            </Modal>

            <Modal
                open=delete_pending
                title="Confirmar".to_string()
                on_close=Callback::new(move |_| form.update(|f| f.cancel_delete()))
            >
                <p class="confirm-text">{delete_prompt.clone()}</p>
                <div class="modal-actions">
                    <Space>
                        <Button appearance=ButtonAppearance::Secondary on_click=cancel_delete>
                            "Cancelar"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=confirm_delete>
                            "Eliminar"
                        </Button>
                    </Space>
                </div>
            </Modal>
        </div>
    }
}

fn table_row(
    row: Row,
    columns: &[Column],
    modal_columns: Signal<Vec<Column>>,
    form: RwSignal<FormState>,
) -> impl IntoView {
    let cells = columns
        .iter()
        .map(|col| view! { <td class="table__cell">{col.display(&row)}</td> })
        .collect_view();
    let edit_row = row.clone();
    let delete_row = row;
    view! {
        <tr class="table__row">
            {cells}
            <td class="table__cell table__cell--actions">
                <button
                    class="table__action"
                    title="Editar"
                    on:click=move |_| {
                        let cols = modal_columns.get_untracked();
                        form.update(|f| f.open_edit(&edit_row, &cols));
                    }
                >
                    {icon("edit")}
                </button>
                <button
                    class="table__action table__action--danger"
                    title="Eliminar"
                    on:click=move |_| {
                        form.update(|f| {
                            f.request_delete(&delete_row);
                        });
                    }
                >
                    {icon("trash")}
                </button>
            </td>
        </tr>
    }
}

fn form_field(column: Column, form: RwSignal<FormState>) -> impl IntoView {
    let label = column.label.clone();
    let disabled = column.disabled;
    let input = match column.kind.clone() {
        ColumnType::Checkbox => {
            let read = column.clone();
            view! {
                <input
                    type="checkbox"
                    class="form-checkbox"
                    disabled=disabled
                    prop:checked=move || form.with(|f| f.is_checked(&read))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.set_checked(&column, checked));
                    }
                />
            }
            .into_any()
        }
        ColumnType::Select(source) => {
            let read = column.clone();
            let current = move || form.with(|f| f.field_text(&read));
            view! {
                <select
                    class="form-select"
                    disabled=disabled
                    on:change=move |ev| {
                        let chosen = event_target_value(&ev);
                        form.update(|f| f.set_field(&column, &chosen));
                    }
                >
                    <option value="">"-- Seleccione --"</option>
                    {source
                        .options
                        .iter()
                        .map(|option| {
                            let value = SelectSource::option_value(option);
                            let text = source.option_label(option);
                            let selected_value = value.clone();
                            let current = current.clone();
                            view! {
                                <option value=value selected=move || current() == selected_value>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        kind => {
            let input_type = match kind {
                ColumnType::Number => "number",
                ColumnType::Date => "date",
                _ => "text",
            };
            let read = column.clone();
            view! {
                <input
                    type=input_type
                    class="form-input"
                    disabled=disabled
                    prop:value=move || form.with(|f| f.field_text(&read))
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        form.update(|f| f.set_field(&column, &raw));
                    }
                />
            }
            .into_any()
        }
    };
    view! {
        <label class="form-label">{label}</label>
        {input}
    }
}
