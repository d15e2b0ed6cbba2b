//! Main application component with routing and the session role gate.

use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;
use yew_router::prelude::*;

use core_types::Role;

use crate::components::{NoticeBanner, RoleGate};
use crate::pages::{
    AdminCoursesPage, AdminStatsPage, AdminUsersPage, CoursesPage, DashboardPage, LoginPage,
    ProgressPage,
};
use crate::state::{AppStore, StoreHandle};

/// Local-storage key for the session marker. Logout deletes it.
const SESSION_KEY: &str = "campus.session";

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/courses")]
    Courses,
    #[at("/progress")]
    Progress,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/courses")]
    AdminCourses,
    #[at("/admin/stats")]
    AdminStats,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
///
/// Exactly one page renders at a time; the admin pages sit behind the
/// role gate.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Courses => html! { <CoursesPage /> },
        Route::Progress => html! { <ProgressPage /> },
        Route::AdminUsers => html! { <RoleGate><AdminUsersPage /></RoleGate> },
        Route::AdminCourses => html! { <RoleGate><AdminCoursesPage /></RoleGate> },
        Route::AdminStats => html! { <RoleGate><AdminStatsPage /></RoleGate> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(AppStore::default);

    // Persist the session marker once at startup.
    {
        let session = store.store.session.clone();
        use_effect_with((), move |_| {
            if let Err(err) = LocalStorage::set(SESSION_KEY, &session) {
                web_sys::console::error_1(&format!("Failed to persist session: {err}").into());
            }
        });
    }

    html! {
        <ContextProvider<StoreHandle> context={store}>
            <BrowserRouter>
                <div class="app-container">
                    <Sidebar />
                    <main class="main-content">
                        <NoticeBanner />
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ContextProvider<StoreHandle>>
    }
}

/// Sidebar navigation component.
///
/// The admin entries only render for an Admin session. This is a UI
/// affordance, not an authorization boundary.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    let store = use_context::<StoreHandle>().expect("store context");
    let navigator = use_navigator().expect("navigator");
    let session = store.store.session.clone();

    let on_logout = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        LocalStorage::delete(SESSION_KEY);
        navigator.push(&Route::Login);
    });

    html! {
        <aside class="sidebar">
            <Link<Route> to={Route::Dashboard} classes="nav-brand">
                {"Campus Dashboard"}
            </Link<Route>>
            <div class="session-user">{ &session.name }</div>
            <nav>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Dashboard}>
                            {"Dashboard"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Courses}>
                            {"My Courses"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Progress}>
                            {"Progress"}
                        </Link<Route>>
                    </li>
                </ul>
                if session.role == Role::Admin {
                    <div class="nav-section">{"Administration"}</div>
                    <ul class="nav-links">
                        <li>
                            <Link<Route> to={Route::AdminUsers}>
                                {"User Management"}
                            </Link<Route>>
                        </li>
                        <li>
                            <Link<Route> to={Route::AdminCourses}>
                                {"Manage Courses"}
                            </Link<Route>>
                        </li>
                        <li>
                            <Link<Route> to={Route::AdminStats}>
                                {"Statistics"}
                            </Link<Route>>
                        </li>
                    </ul>
                }
            </nav>
            <a href="#" class="logout-link" onclick={on_logout}>{"Log out"}</a>
        </aside>
    }
}
