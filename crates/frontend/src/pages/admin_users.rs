//! User-management page for administrators.

use view_models::user_rows;
use yew::prelude::*;

use crate::state::{Action, StoreHandle};

/// User management page component: one row per managed user with a
/// block/unblock toggle.
#[function_component(AdminUsersPage)]
pub fn admin_users_page() -> Html {
    let store = use_context::<StoreHandle>().expect("store context");
    let rows = user_rows(&store.store);

    html! {
        <div>
            <h1>{"User Management"}</h1>

            <table class="users-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Role"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| {
                        let on_toggle = {
                            let store = store.clone();
                            let id = row.id;
                            Callback::from(move |_| store.dispatch(Action::ToggleUser(id)))
                        };

                        html! {
                            <tr key={row.id}>
                                <td>{ row.id }</td>
                                <td>{ &row.name }</td>
                                <td>{ &row.email }</td>
                                <td>{ &row.role_label }</td>
                                <td>
                                    <button class={row.action_class} onclick={on_toggle}>
                                        { row.action_label }
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
