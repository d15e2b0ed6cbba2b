//! Login placeholder page; the logout action lands here.

use yew::prelude::*;

/// Login page component.
///
/// Authentication is out of scope; this is only where logout navigates
/// after clearing the session marker.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <div class="card login-card">
            <h1>{"Signed Out"}</h1>
            <p>{"Your session has been cleared. Reload the page to start a new seeded session."}</p>
        </div>
    }
}
