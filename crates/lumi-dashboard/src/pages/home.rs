//! Dashboard home page

use leptos::*;

use crate::components::use_reveal;

struct SubjectPrompt {
    icon: &'static str,
    title: &'static str,
    prompt: &'static str,
    color: &'static str,
}

static SUBJECTS: [SubjectPrompt; 4] = [
    SubjectPrompt {
        icon: "💬",
        title: "Language",
        prompt: "How do you say \"Good Morning\" in Chinese?",
        color: "bg-blue-500",
    },
    SubjectPrompt {
        icon: "📖",
        title: "Essay",
        prompt: "Write a short essay about sustainability",
        color: "bg-pink-500",
    },
    SubjectPrompt {
        icon: "🧮",
        title: "Math",
        prompt: "Solve the system by substitution: y = 2x; y = 5x - 21",
        color: "bg-purple-500",
    },
    SubjectPrompt {
        icon: "🏛️",
        title: "History",
        prompt: "How was daily life in the Roman Empire?",
        color: "bg-green-500",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_reveal("subject-prompts", 0.2);

    view! {
        <div class="flex-1 p-6 overflow-auto">
            // Header with stats
            <div class="flex items-center justify-between mb-8">
                <div class="w-16 h-16 bg-gradient-to-br from-indigo-100 to-purple-100 rounded-full flex items-center justify-center text-3xl">
                    "🦉"
                </div>
                <div class="flex items-center space-x-6">
                    <div class="flex items-center space-x-2">
                        <span class="text-purple-500">"🏆"</span>
                        <span class="font-semibold">"150 Points"</span>
                    </div>
                    <div class="flex items-center space-x-2">
                        <span class="text-orange-500">"⚡"</span>
                        <span class="font-semibold">"5 Day Streak"</span>
                    </div>
                </div>
            </div>

            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold mb-4">"How can I help you today?"</h1>
            </div>

            // Subject prompt cards
            <div
                id="subject-prompts"
                class=move || format!(
                    "grid grid-cols-1 md:grid-cols-2 gap-6 max-w-4xl mx-auto mb-8 transition-all duration-700 {}",
                    if state.get().visible { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-4" },
                )
            >
                {SUBJECTS.iter().map(|subject| view! {
                    <a
                        href="/chat"
                        class="block bg-white rounded-lg shadow p-6 hover:shadow-lg transition-all duration-300 group"
                    >
                        <div class="flex items-start space-x-4">
                            <div class=format!(
                                "w-12 h-12 rounded-lg {} flex items-center justify-center text-2xl group-hover:scale-110 transition-transform",
                                subject.color,
                            )>
                                {subject.icon}
                            </div>
                            <div class="flex-1">
                                <h3 class="font-semibold text-lg mb-2">{subject.title}</h3>
                                <p class="text-gray-600 text-sm leading-relaxed">{subject.prompt}</p>
                            </div>
                        </div>
                    </a>
                }).collect::<Vec<_>>()}
            </div>

            <div class="flex justify-center space-x-4">
                <a href="/games" class="px-4 py-2 bg-white border border-gray-200 rounded-full text-sm font-medium hover:bg-gray-100 transition">
                    "🎮 Brain Rush"
                </a>
                <a href="/history" class="px-4 py-2 bg-white border border-gray-200 rounded-full text-sm font-medium hover:bg-gray-100 transition">
                    "🕐 Learning History"
                </a>
            </div>
        </div>
    }
}
