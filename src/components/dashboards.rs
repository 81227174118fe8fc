//! Page Views
//!
//! One view per page. Each lists exactly the forms and list that page owns.

use leptos::prelude::*;

use crate::components::{
    ComplaintForm, ComplaintList, CreateUserForm, LoginForm, NavBar, NotificationList, ProgressForm,
    RegistrationForm, UpdateForm, VerifyForm,
};
use crate::page::ListKind;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container py-4 home-page">
            <h1>"Complaint Desk"</h1>
            <div class="row g-4">
                <div class="col-md-6"><LoginForm /></div>
                <div class="col-md-6"><RegistrationForm /></div>
            </div>
        </main>
    }
}

#[component]
pub fn CitizenDashboard() -> impl IntoView {
    view! {
        <NavBar />
        <main class="container dashboard">
            <ComplaintForm />
            <NotificationList />
            <h2>"My complaints"</h2>
            <ComplaintList kind=ListKind::Complaints />
        </main>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <NavBar />
        <main class="container dashboard">
            <div class="row g-4">
                <div class="col-lg-6"><UpdateForm /></div>
                <div class="col-lg-6"><CreateUserForm /></div>
            </div>
            <h2>"All complaints"</h2>
            <ComplaintList kind=ListKind::Complaints />
        </main>
    }
}

#[component]
pub fn VerifierDashboard() -> impl IntoView {
    view! {
        <NavBar />
        <main class="container dashboard">
            <VerifyForm />
            <h2>"Awaiting verification"</h2>
            <ComplaintList kind=ListKind::VerifierQueue />
        </main>
    }
}

#[component]
pub fn StaffDashboard() -> impl IntoView {
    view! {
        <NavBar />
        <main class="container dashboard">
            <ProgressForm />
            <h2>"Assigned to me"</h2>
            <ComplaintList kind=ListKind::StaffQueue />
        </main>
    }
}
