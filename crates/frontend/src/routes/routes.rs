use crate::domain::a001_employee::ui::details::EmployeeFormPage;
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/">"Login"</A>
            <A href="/form">"Submit Form"</A>
            <A href="/list">"View Submissions"</A>
        </nav>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Page not found"</h1>
            <A href="/">"Back to login"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="content">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/form") view=EmployeeFormPage />
                    <Route path=path!("/form/:id") view=EmployeeFormPage />
                    <Route path=path!("/list") view=EmployeeList />
                </Routes>
            </main>
        </Router>
    }
}
