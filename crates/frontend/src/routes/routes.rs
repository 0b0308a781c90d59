use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::film::ui::admin::AdminDashboard;
use crate::domain::film::ui::list::HomePage;
use crate::domain::film::ui::page::FilmPage;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;

#[component]
fn Navbar() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    view! {
        <nav class="navbar">
            <A href="/">"Film Archive"</A>
            <div class="navbar-links">
                <A href="/admin">"Admin"</A>
                <Show
                    when=move || auth_state.get().is_authenticated()
                    fallback=|| view! { <A href="/login">"Login"</A> }
                >
                    <button class="btn-logout" on:click=move |_| do_logout(set_auth_state)>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn AdminPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AdminDashboard />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| "Not found.">
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/films/:id") view=FilmPage />
                    <Route path=path!("/admin") view=AdminPage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </main>
        </Router>
    }
}
