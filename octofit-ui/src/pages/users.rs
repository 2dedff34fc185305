//! Users Page
//!
//! Users table with an edit modal. Users and team choices load
//! concurrently; a successful edit replaces the table with a fresh fetch.

use leptos::*;
use octofit::{
    fetch_collection, load_team_options, submit_user_update, ResourceKind, ResourceView,
    UserEditor, UserRow,
};

use crate::api::GlooTransport;
use crate::components::{EditUserModal, PageHeader, ResourceBody};
use crate::state::global::GlobalState;

/// Users page component
#[component]
pub fn Users() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let users = create_rw_signal(ResourceView::<UserRow>::mount(&state.endpoints));
    let team_options = create_rw_signal(Vec::<String>::new());
    let editor = create_rw_signal(UserEditor::new());

    // Fetch users and teams on mount; each lands on its own
    let ticket = users.try_update(|v| v.begin());
    if let Some(ticket) = ticket {
        let users_url = state.endpoints.users.clone();
        spawn_local(async move {
            let result = fetch_collection(&GlooTransport, &users_url).await;
            users.try_update(|v| v.settle(ticket, result));
        });
    }

    let teams_url = state.endpoints.teams.clone();
    spawn_local(async move {
        let options = load_team_options(&GlooTransport, &teams_url).await;
        team_options.try_set(options);
    });

    on_cleanup(move || {
        users.try_update(|v| v.unmount());
    });

    let submit = {
        let state = state.clone();
        move || {
            let users_url = state.endpoints.users.clone();
            let submission = editor.try_update(|e| e.begin_submit(&users_url)).flatten();
            let Some(submission) = submission else {
                flush_notice(editor, &state);
                return;
            };

            let state = state.clone();
            spawn_local(async move {
                let result = submit_user_update(&GlooTransport, &submission, &users_url).await;
                if let Some(records) = editor.try_update(|e| e.settle(result)).flatten() {
                    users.try_update(|v| v.replace(&records));
                }
                flush_notice(editor, &state);
            });
        }
    };

    view! {
        <div>
            <PageHeader kind=ResourceKind::Users />
            <ResourceBody
                resource=users
                render=move |rows: Vec<UserRow>| view! { <UsersTable rows=rows editor=editor /> }
            />

            {move || {
                editor.with(|e| e.is_visible()).then(|| {
                    view! {
                        <EditUserModal
                            editor=editor
                            team_options=team_options
                            on_submit=submit.clone()
                        />
                    }
                })
            }}
        </div>
    }
}

/// Move the editor's acknowledgment into a toast
fn flush_notice(editor: RwSignal<UserEditor>, state: &GlobalState) {
    let notice = editor
        .try_update(|e| {
            let notice = e.notice().cloned();
            e.dismiss_notice();
            notice
        })
        .flatten();

    if let Some(notice) = notice {
        if notice.is_success() {
            state.show_success(notice.message());
        } else {
            state.show_error(notice.message());
        }
    }
}

#[component]
fn UsersTable(rows: Vec<UserRow>, editor: RwSignal<UserEditor>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-left">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        <th class="py-2 px-3">"Hero Name"</th>
                        <th class="py-2 px-3">"Real Name (Alias)"</th>
                        <th class="py-2 px-3">"Email"</th>
                        <th class="py-2 px-3">"Team"</th>
                        <th class="py-2 px-3">"Fitness Level"</th>
                        <th class="py-2 px-3">"Total Points"</th>
                        <th class="py-2 px-3">"Joined"</th>
                        <th class="py-2 px-3">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.clone()
                        key=|user| user.key.clone()
                        children=move |user| view! { <UserLine user=user editor=editor /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn UserLine(user: UserRow, editor: RwSignal<UserEditor>) -> impl IntoView {
    let record = user.record.clone();

    view! {
        <tr class="border-b border-gray-800 hover:bg-gray-800">
            <td class="py-2 px-3 font-semibold">{user.name.clone()}</td>
            <td class="py-2 px-3 text-gray-300">{user.alias.clone()}</td>
            <td class="py-2 px-3 text-gray-400">{user.email.clone()}</td>
            <td class="py-2 px-3">
                <span class="bg-primary-600 text-white text-xs px-2 py-0.5 rounded-full">
                    {user.team.clone()}
                </span>
            </td>
            <td class="py-2 px-3">
                <span class="bg-blue-600 text-white text-xs px-2 py-0.5 rounded-full capitalize">
                    {user.fitness_level.clone()}
                </span>
            </td>
            <td class="py-2 px-3 text-green-400 font-semibold">{user.points()}</td>
            <td class="py-2 px-3 text-gray-400">{user.joined()}</td>
            <td class="py-2 px-3">
                <button
                    on:click=move |_| editor.update(|e| e.open(&record))
                    class="px-3 py-1 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm transition-colors"
                >
                    "✏️ Edit"
                </button>
            </td>
        </tr>
    }
}
