//! Admin list editor for team members.

use content::editor::ListEditor;
use content::ids;
use content::model::{SocialLinks, TeamMember};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::admin::confirm_dialog::ConfirmDialog;
use crate::components::admin::search_bar::SearchBar;
use crate::components::admin::shell::AdminShell;
use crate::pages::admin::forms::optional_field;
use crate::util::clock;

#[component]
pub fn AdminTeamPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<TeamMember>>>();
    let query = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);
    let edit_id = RwSignal::new(None::<String>);
    let delete_id = RwSignal::new(None::<String>);

    let filtered = move || {
        let q = query.get();
        editor
            .get()
            .search(&q)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let on_delete = Callback::new(move |()| {
        if let Some(id) = delete_id.get_untracked() {
            editor.update(|list| {
                list.remove(&id);
            });
        }
        delete_id.set(None);
    });

    view! {
        <Title text="Team — Admin"/>
        <AdminShell title="Team">
            <div class="admin-toolbar">
                <SearchBar query=query placeholder="Search by name, role, or bio..."/>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Team Member"
                </button>
            </div>

            <div class="admin-list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|member| {
                            let edit_target = member.id.clone();
                            let delete_target = member.id.clone();
                            let inactive = !member.active;
                            view! {
                                <article class="admin-card">
                                    <header class="admin-card__header">
                                        <h3>{member.name.clone()}</h3>
                                        <Show when=move || inactive>
                                            <span class="admin-card__badge admin-card__badge--muted">
                                                "Hidden"
                                            </span>
                                        </Show>
                                    </header>
                                    <p class="admin-card__meta">{member.role.clone()}</p>
                                    <p class="admin-card__excerpt">{member.bio.clone()}</p>
                                    <div class="admin-card__actions">
                                        <button
                                            class="btn"
                                            on:click=move |_| edit_id.set(Some(edit_target.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| delete_id.set(Some(delete_target.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || filtered().is_empty()>
                    <p class="admin-empty">"No team members match your search."</p>
                </Show>
            </div>

            <Show when=move || show_add.get()>
                <TeamMemberDialog
                    heading="Add Team Member"
                    existing=None
                    on_close=Callback::new(move |()| show_add.set(false))
                />
            </Show>
            {move || {
                edit_id.get().and_then(|id| {
                    editor.get().get(&id).cloned().map(|member| {
                        view! {
                            <TeamMemberDialog
                                heading="Edit Team Member"
                                existing=Some(member)
                                on_close=Callback::new(move |()| edit_id.set(None))
                            />
                        }
                    })
                })
            }}
            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Team Member"
                    message="This removes the member from the about page for this session."
                    on_cancel=Callback::new(move |()| delete_id.set(None))
                    on_confirm=on_delete
                />
            </Show>
        </AdminShell>
    }
}

#[component]
fn TeamMemberDialog(
    heading: &'static str,
    existing: Option<TeamMember>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<TeamMember>>>();

    let record_id = existing.as_ref().map(|m| m.id.clone());
    let name = RwSignal::new(existing.as_ref().map(|m| m.name.clone()).unwrap_or_default());
    let role = RwSignal::new(existing.as_ref().map(|m| m.role.clone()).unwrap_or_default());
    let image = RwSignal::new(existing.as_ref().map(|m| m.image.clone()).unwrap_or_default());
    let bio = RwSignal::new(existing.as_ref().map(|m| m.bio.clone()).unwrap_or_default());
    let linkedin = RwSignal::new(
        existing
            .as_ref()
            .and_then(|m| m.socials.linkedin.clone())
            .unwrap_or_default(),
    );
    let twitter = RwSignal::new(
        existing
            .as_ref()
            .and_then(|m| m.socials.twitter.clone())
            .unwrap_or_default(),
    );
    let facebook = RwSignal::new(
        existing
            .as_ref()
            .and_then(|m| m.socials.facebook.clone())
            .unwrap_or_default(),
    );
    let instagram = RwSignal::new(
        existing
            .as_ref()
            .and_then(|m| m.socials.instagram.clone())
            .unwrap_or_default(),
    );
    let active = RwSignal::new(existing.as_ref().is_none_or(|m| m.active));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || role.get().trim().is_empty() {
            return;
        }
        let record = TeamMember {
            id: record_id
                .clone()
                .unwrap_or_else(|| ids::timestamp_id(clock::now_ms())),
            name: name.get().trim().to_owned(),
            role: role.get().trim().to_owned(),
            image: image.get().trim().to_owned(),
            bio: bio.get().trim().to_owned(),
            socials: SocialLinks {
                linkedin: optional_field(&linkedin.get()),
                twitter: optional_field(&twitter.get()),
                facebook: optional_field(&facebook.get()),
                instagram: optional_field(&instagram.get()),
            },
            active: active.get(),
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
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Role"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || role.get()
                            on:input=move |ev| role.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Photo URL"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || image.get()
                            on:input=move |ev| image.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Bio"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "LinkedIn URL"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || linkedin.get()
                            on:input=move |ev| linkedin.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Twitter URL"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || twitter.get()
                            on:input=move |ev| twitter.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Facebook URL"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || facebook.get()
                            on:input=move |ev| facebook.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Instagram URL"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || instagram.get()
                            on:input=move |ev| instagram.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || active.get()
                            on:change=move |_| active.update(|value| *value = !*value)
                        />
                        "Visible on the about page"
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
