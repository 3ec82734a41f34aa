//! Sidebar navigation

use leptos::*;
use leptos_router::use_location;

struct NavItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

static NAV_ITEMS: [NavItem; 6] = [
    NavItem { path: "/chat", label: "New Chat", icon: "✚" },
    NavItem { path: "/games", label: "Brain Rush", icon: "🎮" },
    NavItem { path: "/forum", label: "Forum", icon: "💬" },
    NavItem { path: "/history", label: "History", icon: "🕐" },
    NavItem { path: "/plans", label: "Plans", icon: "⭐" },
    NavItem { path: "/profile", label: "Profile", icon: "👤" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let (collapsed, set_collapsed) = create_signal(false);
    let pathname = use_location().pathname;
    let active = move |path: &'static str| pathname.get() == path;

    view! {
        <div class=move || format!(
            "{} transition-all duration-300 bg-white border-r border-gray-200 flex flex-col",
            if collapsed.get() { "w-16" } else { "w-64" },
        )>
            // Header
            <div class="p-4 border-b border-gray-200 flex items-center justify-between">
                <Show when=move || !collapsed.get()>
                    <a href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🦉"</span>
                        <span class="font-bold text-lg">"Lumi"</span>
                    </a>
                </Show>
                <button
                    class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                    on:click=move |_| set_collapsed.update(|value| *value = !*value)
                >
                    {move || if collapsed.get() { "☰" } else { "✕" }}
                </button>
            </div>

            // Stats
            <Show when=move || !collapsed.get()>
                <div class="p-4 space-y-3 border-b border-gray-200">
                    <div class="flex items-center space-x-2">
                        <span class="text-purple-500">"🏆"</span>
                        <span class="text-sm font-medium">"150 Points"</span>
                    </div>
                    <div class="flex items-center space-x-2">
                        <span class="text-orange-500">"⚡"</span>
                        <span class="text-sm font-medium">"5 Day Streak"</span>
                    </div>
                </div>
            </Show>

            // Navigation
            <div class="flex-1 p-4 space-y-2">
                {NAV_ITEMS.iter().map(|item| view! {
                    <a
                        href=item.path
                        class=move || format!(
                            "flex items-center w-full px-3 py-2 rounded-lg transition-colors {}",
                            if active(item.path) {
                                "bg-indigo-600 text-white"
                            } else {
                                "text-gray-600 hover:bg-gray-100 hover:text-gray-900"
                            },
                        )
                    >
                        <span class="w-5 text-center">{item.icon}</span>
                        <Show when=move || !collapsed.get()>
                            <span class="ml-2">{item.label}</span>
                        </Show>
                    </a>
                }).collect::<Vec<_>>()}
            </div>

            // Sign out
            <div class="p-4 border-t border-gray-200">
                <a
                    href="/"
                    class="flex items-center w-full px-3 py-2 rounded-lg text-gray-600 hover:bg-gray-100 hover:text-gray-900 transition-colors"
                >
                    <span class="w-5 text-center">"🚪"</span>
                    <Show when=move || !collapsed.get()>
                        <span class="ml-2">"Sign Out"</span>
                    </Show>
                </a>
            </div>
        </div>
    }
}
