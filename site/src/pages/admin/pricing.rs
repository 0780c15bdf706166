//! Admin editor for pricing groups and the plans nested inside them.
//!
//! Groups are list records like every other family; plans are edited in
//! place through a second dialog keyed by `(group id, plan index)`.

use content::editor::ListEditor;
use content::ids;
use content::model::{PricingPlan, ServicePricing};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::admin::confirm_dialog::ConfirmDialog;
use crate::components::admin::search_bar::SearchBar;
use crate::components::admin::shell::AdminShell;
use crate::pages::admin::forms::{lines_to_list, list_to_lines};
use crate::util::clock;

#[component]
pub fn AdminPricingPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<ServicePricing>>>();
    let query = RwSignal::new(String::new());
    let show_add_group = RwSignal::new(false);
    let edit_group_id = RwSignal::new(None::<String>);
    let delete_group_id = RwSignal::new(None::<String>);
    // (group id, Some(index) to edit, None to append)
    let plan_target = RwSignal::new(None::<(String, Option<usize>)>);
    let delete_plan = RwSignal::new(None::<(String, usize)>);

    let filtered = move || {
        let q = query.get();
        editor
            .get()
            .search(&q)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let on_delete_group = Callback::new(move |()| {
        if let Some(id) = delete_group_id.get_untracked() {
            editor.update(|list| {
                list.remove(&id);
            });
        }
        delete_group_id.set(None);
    });

    let on_delete_plan = Callback::new(move |()| {
        if let Some((group_id, index)) = delete_plan.get_untracked() {
            editor.update(|list| {
                list.update(&group_id, |group| {
                    if index < group.plans.len() {
                        group.plans.remove(index);
                    }
                });
            });
        }
        delete_plan.set(None);
    });

    view! {
        <Title text="Pricing — Admin"/>
        <AdminShell title="Pricing">
            <div class="admin-toolbar">
                <SearchBar query=query placeholder="Search by service or plan name..."/>
                <button class="btn btn--primary" on:click=move |_| show_add_group.set(true)>
                    "+ Add Pricing Group"
                </button>
            </div>

            <div class="admin-list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|group| {
                            let group_id = group.id.clone();
                            let edit_target = group.id.clone();
                            let delete_target = group.id.clone();
                            let add_plan_target = group.id.clone();
                            view! {
                                <article class="admin-card admin-card--group">
                                    <header class="admin-card__header">
                                        <h3>{group.service.clone()}</h3>
                                        <span class="admin-card__meta">
                                            {format!("{} plans", group.plans.len())}
                                        </span>
                                    </header>
                                    <ul class="admin-plan-list">
                                        {group
                                            .plans
                                            .iter()
                                            .enumerate()
                                            .map(|(index, plan)| {
                                                let edit_plan_group = group_id.clone();
                                                let delete_plan_group = group_id.clone();
                                                view! {
                                                    <li class="admin-plan-list__row">
                                                        <span class="admin-plan-list__name">
                                                            {plan.name.clone()}
                                                            {if plan.popular { " ★" } else { "" }}
                                                        </span>
                                                        <span class="admin-plan-list__price">
                                                            {plan.price.clone()}
                                                            " "
                                                            {plan.period.clone()}
                                                        </span>
                                                        <span class="admin-plan-list__actions">
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| {
                                                                    plan_target.set(Some((
                                                                        edit_plan_group.clone(),
                                                                        Some(index),
                                                                    )));
                                                                }
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| {
                                                                    delete_plan.set(Some((
                                                                        delete_plan_group.clone(),
                                                                        index,
                                                                    )));
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <div class="admin-card__actions">
                                        <button
                                            class="btn"
                                            on:click=move |_| {
                                                plan_target.set(Some((add_plan_target.clone(), None)));
                                            }
                                        >
                                            "+ Add Plan"
                                        </button>
                                        <button
                                            class="btn"
                                            on:click=move |_| edit_group_id.set(Some(edit_target.clone()))
                                        >
                                            "Edit Group"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| {
                                                delete_group_id.set(Some(delete_target.clone()));
                                            }
                                        >
                                            "Delete Group"
                                        </button>
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || filtered().is_empty()>
                    <p class="admin-empty">"No pricing groups match your search."</p>
                </Show>
            </div>

            <Show when=move || show_add_group.get()>
                <GroupDialog
                    heading="Add Pricing Group"
                    existing=None
                    on_close=Callback::new(move |()| show_add_group.set(false))
                />
            </Show>
            {move || {
                edit_group_id.get().and_then(|id| {
                    editor.get().get(&id).cloned().map(|group| {
                        view! {
                            <GroupDialog
                                heading="Edit Pricing Group"
                                existing=Some(group)
                                on_close=Callback::new(move |()| edit_group_id.set(None))
                            />
                        }
                    })
                })
            }}
            {move || {
                plan_target.get().map(|(group_id, index)| {
                    let existing = index.and_then(|index| {
                        editor
                            .get()
                            .get(&group_id)
                            .and_then(|group| group.plans.get(index).cloned())
                    });
                    view! {
                        <PlanDialog
                            group_id=group_id
                            plan_index=index
                            existing=existing
                            on_close=Callback::new(move |()| plan_target.set(None))
                        />
                    }
                })
            }}
            <Show when=move || delete_group_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Pricing Group"
                    message="This removes the group and every plan in it for this session."
                    on_cancel=Callback::new(move |()| delete_group_id.set(None))
                    on_confirm=on_delete_group
                />
            </Show>
            <Show when=move || delete_plan.get().is_some()>
                <ConfirmDialog
                    title="Delete Plan"
                    message="This removes the plan from its pricing group for this session."
                    on_cancel=Callback::new(move |()| delete_plan.set(None))
                    on_confirm=on_delete_plan
                />
            </Show>
        </AdminShell>
    }
}

#[component]
fn GroupDialog(
    heading: &'static str,
    existing: Option<ServicePricing>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<ServicePricing>>>();

    let record_id = existing.as_ref().map(|g| g.id.clone());
    let service = RwSignal::new(existing.as_ref().map(|g| g.service.clone()).unwrap_or_default());
    let icon = RwSignal::new(existing.as_ref().map(|g| g.icon.clone()).unwrap_or_default());
    let existing_plans = existing.as_ref().map(|g| g.plans.clone()).unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if service.get().trim().is_empty() {
            return;
        }
        let record = ServicePricing {
            id: record_id
                .clone()
                .unwrap_or_else(|| ids::timestamp_id(clock::now_ms())),
            service: service.get().trim().to_owned(),
            icon: icon.get().trim().to_owned(),
            plans: existing_plans.clone(),
        };
        editor.update(|list| match &record_id {
            Some(id) => {
                list.update(id, |existing| *existing = record.clone());
            }
            None => list.add(record.clone()),
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <form on:submit=on_submit>
                    <label class="dialog__label">
                        "Service Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            placeholder="Must match the service title to show on its page"
                            prop:value=move || service.get()
                            on:input=move |ev| service.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Icon"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || icon.get()
                            on:input=move |ev| icon.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn PlanDialog(
    group_id: String,
    plan_index: Option<usize>,
    existing: Option<PricingPlan>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<ServicePricing>>>();

    let name = RwSignal::new(existing.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let price = RwSignal::new(existing.as_ref().map(|p| p.price.clone()).unwrap_or_default());
    let period = RwSignal::new(existing.as_ref().map(|p| p.period.clone()).unwrap_or_default());
    let features = RwSignal::new(
        existing
            .as_ref()
            .map(|p| list_to_lines(&p.features))
            .unwrap_or_default(),
    );
    let icon = RwSignal::new(existing.as_ref().map(|p| p.icon.clone()).unwrap_or_default());
    let popular = RwSignal::new(existing.as_ref().is_some_and(|p| p.popular));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || price.get().trim().is_empty() {
            return;
        }
        let plan = PricingPlan {
            name: name.get().trim().to_owned(),
            price: price.get().trim().to_owned(),
            period: period.get().trim().to_owned(),
            features: lines_to_list(&features.get()),
            popular: popular.get(),
            icon: icon.get().trim().to_owned(),
        };
        editor.update(|list| {
            list.update(&group_id, |group| match plan_index {
                Some(index) if index < group.plans.len() => group.plans[index] = plan.clone(),
                _ => group.plans.push(plan.clone()),
            });
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{if plan_index.is_some() { "Edit Plan" } else { "Add Plan" }}</h2>
                <form on:submit=on_submit>
                    <label class="dialog__label">
                        "Plan Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Price"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            placeholder="e.g. $499 or Custom"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Period"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g. per month"
                            prop:value=move || period.get()
                            on:input=move |ev| period.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Features (one per line)"
                        <textarea
                            class="dialog__input"
                            rows="4"
                            prop:value=move || features.get()
                            on:input=move |ev| features.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Icon"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || icon.get()
                            on:input=move |ev| icon.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || popular.get()
                            on:change=move |_| popular.update(|value| *value = !*value)
                        />
                        "Mark as most popular"
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
