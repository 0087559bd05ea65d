//! Field Input Component
//!
//! One labelled input of an entity form, picked by the control's kind.
//! Edits are written back through `EntityForm::set_text` on `change`.

use entity_sync::views::UpdateView;
use entity_sync::{FieldKind, FormControl};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::AdminEntity;
use crate::context::use_app_context;
use crate::services::{relation_choices, RelationChoice};
use crate::store::{store_push_alert, use_app_store};

/// # Arguments
/// * `form` - Update view owning the form
/// * `control` - Snapshot of the control; only its value is read reactively
/// * `set_error` - Receives the last rejected input, cleared on a valid edit
#[component]
pub fn FieldInput<T: AdminEntity>(
    form: RwSignal<UpdateView<T>>,
    control: FormControl,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let name = control.name;
    let read_only = control.disabled;
    let input_id = format!("field_{}", name);
    let disabled = move || read_only || form.with(|form| form.is_saving());
    let text = move || form.with(|form| form.form().text(name));

    let on_edit = move |raw: String| {
        let result = form.try_update(|form| form.form_mut().set_text(name, &raw));
        match result {
            Some(Err(e)) => set_error.set(Some(e.to_string())),
            _ => set_error.set(None),
        }
    };

    let input = match control.kind {
        FieldKind::Text => view! {
            <input type="text" id=input_id.clone() class="form-control" disabled=disabled
                prop:value=text
                on:change=move |ev| on_edit(event_target_value(&ev)) />
        }
        .into_any(),
        FieldKind::Integer | FieldKind::Decimal => {
            let step = if control.kind == FieldKind::Integer { "1" } else { "any" };
            view! {
                <input type="number" step=step id=input_id.clone() class="form-control"
                    disabled=disabled
                    prop:value=text
                    on:change=move |ev| on_edit(event_target_value(&ev)) />
            }
            .into_any()
        }
        FieldKind::Boolean => {
            let checked = move || {
                form.with(|form| form.form().value(name).and_then(|v| v.as_bool()).unwrap_or(false))
            };
            view! {
                <input type="checkbox" id=input_id.clone() class="form-check-input"
                    disabled=disabled
                    prop:checked=checked
                    on:change=move |ev| on_edit(event_target_checked(&ev).to_string()) />
            }
            .into_any()
        }
        FieldKind::Timestamp => view! {
            <input type="datetime-local" id=input_id.clone() class="form-control" disabled=disabled
                prop:value=text
                on:change=move |ev| on_edit(event_target_value(&ev)) />
        }
        .into_any(),
        FieldKind::Enumeration(symbols) => view! {
            <select id=input_id.clone() class="form-control" disabled=disabled
                prop:value=text
                on:change=move |ev| on_edit(event_target_value(&ev))>
                <option value="">""</option>
                {symbols.iter().map(move |symbol| view! {
                    <option value=*symbol selected=move || text() == *symbol>{*symbol}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Relation => view! {
            <RelationSelect<T> form=form name=name input_id=input_id.clone() on_edit=on_edit />
        }
        .into_any(),
    };

    view! {
        <div class="mb-3">
            <label class="form-label" for=input_id>
                {name}
                {control.required.then_some(" *")}
            </label>
            {input}
        </div>
    }
}

#[component]
fn RelationSelect<T: AdminEntity>(
    form: RwSignal<UpdateView<T>>,
    name: &'static str,
    input_id: String,
    #[prop(into)] on_edit: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (choices, set_choices) = signal(Vec::<RelationChoice>::new());
    let selected = move || form.with(|form| form.form().text(name));
    let disabled = move || form.with(|form| form.is_saving());

    match T::relation(name) {
        Some(kind) => {
            let current = form
                .with_untracked(|form| form.form().value(name).cloned())
                .filter(|v| !v.is_null());
            spawn_local(async move {
                match relation_choices(&ctx.client(), &ctx.config(), kind, current).await {
                    Ok(loaded) => set_choices.set(loaded),
                    Err(e) => store_push_alert(
                        &store,
                        format!("Could not load {} choices: {}", kind.title(), e),
                    ),
                }
            });
        }
        None => {
            let message = format!("[FORM] {} has no relation target for {}", T::NAME, name);
            web_sys::console::warn_1(&message.into());
        }
    }

    view! {
        <select id=input_id class="form-control" disabled=disabled
            prop:value=selected
            on:change=move |ev| on_edit.run(event_target_value(&ev))>
            <option value="">""</option>
            <For
                each=move || choices.get()
                key=|choice| choice.id
                children=move |choice| {
                    let value = choice.id.to_string();
                    let is_selected = {
                        let value = value.clone();
                        move || selected() == value
                    };
                    view! { <option value=value selected=is_selected>{choice.label}</option> }
                }
            />
        </select>
    }
}
