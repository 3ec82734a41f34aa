//! Learning history page

use leptos::*;

struct Session {
    title: &'static str,
    date: &'static str,
    time: &'static str,
    minutes: u32,
    messages: u32,
    subject: &'static str,
    completed: bool,
}

static SESSIONS: [Session; 5] = [
    Session {
        title: "Mathematics - Algebra Basics",
        date: "2024-01-15",
        time: "14:30",
        minutes: 25,
        messages: 18,
        subject: "Mathematics",
        completed: true,
    },
    Session {
        title: "Science - Photosynthesis Process",
        date: "2024-01-14",
        time: "16:45",
        minutes: 18,
        messages: 12,
        subject: "Science",
        completed: true,
    },
    Session {
        title: "English - Grammar Rules",
        date: "2024-01-13",
        time: "10:20",
        minutes: 32,
        messages: 24,
        subject: "English",
        completed: false,
    },
    Session {
        title: "History - World War II",
        date: "2024-01-12",
        time: "15:15",
        minutes: 40,
        messages: 31,
        subject: "History",
        completed: true,
    },
    Session {
        title: "Physics - Newton's Laws",
        date: "2024-01-11",
        time: "11:30",
        minutes: 28,
        messages: 20,
        subject: "Physics",
        completed: true,
    },
];

fn subject_badge(subject: &str) -> &'static str {
    match subject {
        "Mathematics" => "bg-blue-100 text-blue-800",
        "Science" => "bg-green-100 text-green-800",
        "English" => "bg-purple-100 text-purple-800",
        "History" => "bg-orange-100 text-orange-800",
        "Physics" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let total_minutes: u32 = SESSIONS.iter().map(|session| session.minutes).sum();
    let completed = SESSIONS.iter().filter(|session| session.completed).count();

    view! {
        <div class="flex-1 p-4 md:p-6 overflow-auto">
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Learning History"</h1>
                    <p class="text-gray-600">"Review your past learning sessions and progress"</p>
                </div>

                // Stats
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                    <div class="p-4 text-center bg-white rounded-lg shadow">
                        <div class="flex items-center justify-center mb-2 space-x-2">
                            <span class="text-indigo-600">"💬"</span>
                            <span class="text-2xl font-bold text-indigo-600">{SESSIONS.len()}</span>
                        </div>
                        <p class="text-sm text-gray-600">"Total Sessions"</p>
                    </div>
                    <div class="p-4 text-center bg-white rounded-lg shadow">
                        <div class="flex items-center justify-center mb-2 space-x-2">
                            <span class="text-purple-600">"🕐"</span>
                            <span class="text-2xl font-bold text-purple-600">{total_minutes}</span>
                        </div>
                        <p class="text-sm text-gray-600">"Minutes Learned"</p>
                    </div>
                    <div class="p-4 text-center bg-white rounded-lg shadow">
                        <div class="flex items-center justify-center mb-2 space-x-2">
                            <span class="text-orange-500">"🏆"</span>
                            <span class="text-2xl font-bold text-orange-500">{completed}</span>
                        </div>
                        <p class="text-sm text-gray-600">"Completed"</p>
                    </div>
                </div>

                // Sessions
                <div class="space-y-4">
                    {SESSIONS.iter().map(|session| view! {
                        <div class="p-4 md:p-6 bg-white rounded-lg shadow hover:shadow-lg transition-shadow">
                            <div class="flex flex-col md:flex-row md:items-center justify-between space-y-3 md:space-y-0">
                                <div class="flex-1">
                                    <div class="flex flex-wrap items-center gap-2 mb-2">
                                        <h3 class="font-semibold text-lg">{session.title}</h3>
                                        <span class=format!(
                                            "px-2 py-1 text-xs font-medium rounded-full {}",
                                            subject_badge(session.subject),
                                        )>
                                            {session.subject}
                                        </span>
                                        <Show when=move || session.completed>
                                            <span class="px-2 py-1 text-xs font-medium rounded-full bg-green-100 text-green-800">
                                                "🏆 Completed"
                                            </span>
                                        </Show>
                                    </div>
                                    <div class="flex flex-wrap gap-4 text-sm text-gray-500">
                                        <span>"🕐 " {session.date} " at " {session.time}</span>
                                        <span>"💬 " {session.messages} " messages"</span>
                                        <span>"Duration: " {session.minutes} " mins"</span>
                                    </div>
                                </div>
                                <div class="flex space-x-2">
                                    <button class="px-3 py-2 border border-gray-300 rounded-lg text-sm hover:bg-gray-50 transition">
                                        "📖 Review"
                                    </button>
                                    <a href="/chat" class="px-3 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg text-sm transition">
                                        "Continue"
                                    </a>
                                </div>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
