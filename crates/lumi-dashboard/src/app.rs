//! Main application component

use leptos::*;
use leptos_router::*;

use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_reveal_context();

    view! {
        <Router>
            <div class="flex h-screen bg-gray-50 text-gray-900 overflow-hidden">
                <Sidebar/>
                <main class="flex-1 flex flex-col overflow-y-auto">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/chat" view=ChatPage/>
                        <Route path="/games" view=GamesPage/>
                        <Route path="/forum" view=ForumPage/>
                        <Route path="/history" view=HistoryPage/>
                        <Route path="/profile" view=ProfilePage/>
                        <Route path="/plans" view=PlansPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
