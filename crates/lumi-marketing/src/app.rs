//! Main application component

use leptos::*;
use leptos_router::*;

use crate::components::provide_reveal_context;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_reveal_context();

    view! {
        <Router>
            <main class="min-h-screen bg-white text-gray-900">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignUpPage/>
                </Routes>
            </main>
        </Router>
    }
}
