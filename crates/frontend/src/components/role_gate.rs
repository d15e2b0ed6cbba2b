//! Role gate for the administrator views.

use core_types::Role;
use yew::prelude::*;

use crate::state::StoreHandle;

/// Properties for RoleGate.
#[derive(Properties, PartialEq)]
pub struct RoleGateProps {
    pub children: Children,
}

/// Renders its children only for an Admin session; anyone else gets an
/// access-denied card. UI affordance only; the store itself does not
/// check roles.
#[function_component(RoleGate)]
pub fn role_gate(props: &RoleGateProps) -> Html {
    let store = use_context::<StoreHandle>().expect("store context");

    if store.store.session.role == Role::Admin {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {
            <div class="card access-denied">
                <h1>{"Access Denied"}</h1>
                <p>{"You do not have permission to view this section."}</p>
            </div>
        }
    }
}
