//! Profile page

use leptos::*;

struct Profile {
    name: &'static str,
    age: u32,
    email: &'static str,
    phone: &'static str,
    grade: &'static str,
    board: &'static str,
    plan: &'static str,
    points: u32,
    streak: u32,
}

static PROFILE: Profile = Profile {
    name: "Karthik",
    age: 16,
    email: "karthik@example.com",
    phone: "+1 234 567 8900",
    grade: "10th Grade",
    board: "CBSE",
    plan: "Free Plan",
    points: 1_240,
    streak: 7,
};

struct MenuGroup {
    title: &'static str,
    items: &'static [(&'static str, &'static str)],
}

static MENU: [MenuGroup; 3] = [
    MenuGroup {
        title: "Account Details",
        items: &[
            ("👑", "Subscription Plan"),
            ("⬆️", "Upgrade to Premium"),
            ("🗄️", "Data Controls"),
            ("🎁", "Rewards"),
            ("👥", "Referrals"),
        ],
    },
    MenuGroup {
        title: "Settings",
        items: &[
            ("🛡️", "Security"),
            ("🔔", "Notifications"),
            ("🎨", "Theme"),
        ],
    },
    MenuGroup {
        title: "About",
        items: &[
            ("💬", "Feedback"),
            ("❓", "FAQ"),
            ("🆘", "Help Centre"),
            ("📄", "Terms of Service"),
            ("🔒", "Privacy Policy"),
        ],
    },
];

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (details_open, set_details_open) = create_signal(false);

    view! {
        <div class="flex-1 p-6 overflow-auto bg-gradient-to-br from-indigo-50 to-purple-50">
            <div class="max-w-4xl mx-auto">
                <Show
                    when=move || !details_open.get()
                    fallback=move || view! { <ProfileDetails on_back=move |_| set_details_open.set(false)/> }
                >
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold">"Profile"</h1>
                    </div>

                    // Overview
                    <div class="mb-8 p-6 bg-white/90 rounded-lg shadow">
                        <div class="flex items-center justify-between">
                            <div class="flex items-center space-x-4">
                                <div class="w-16 h-16 bg-gradient-to-br from-indigo-100 to-purple-100 rounded-full flex items-center justify-center text-3xl">
                                    "🦉"
                                </div>
                                <div>
                                    <h2 class="text-xl font-bold">{PROFILE.name}</h2>
                                    <p class="text-sm text-gray-600">{PROFILE.grade} " • " {PROFILE.board}</p>
                                </div>
                            </div>
                            <button
                                class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg transition"
                                on:click=move |_| set_details_open.set(true)
                            >
                                "View Profile"
                            </button>
                        </div>
                    </div>

                    // Menu groups
                    <div class="space-y-6">
                        {MENU.iter().map(|group| view! {
                            <div class="p-6 bg-white/90 rounded-lg shadow">
                                <h3 class="font-bold text-lg mb-4">{group.title}</h3>
                                <div class="space-y-3">
                                    {group.items.iter().map(|(icon, label)| view! {
                                        <MenuRow icon=icon label=label/>
                                    }).collect::<Vec<_>>()}
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn MenuRow(icon: &'static str, label: &'static str) -> impl IntoView {
    let badge = match label {
        "Subscription Plan" => Some(PROFILE.plan),
        "Rewards" => Some("1,240 points"),
        _ => None,
    };
    let upgrade = label == "Upgrade to Premium";

    view! {
        <div class="flex items-center justify-between p-3 rounded-lg hover:bg-gray-50 transition-colors">
            <div class="flex items-center space-x-3">
                <span class="w-5 text-center">{icon}</span>
                <span class="font-medium">{label}</span>
            </div>
            {badge.map(|value| view! {
                <span class="px-2 py-1 text-xs bg-gray-100 text-gray-700 rounded-full">{value}</span>
            })}
            <Show when=move || upgrade>
                <a href="/plans" class="text-indigo-600 hover:text-indigo-800 text-sm font-medium">"→"</a>
            </Show>
        </div>
    }
}

#[component]
fn ProfileDetails(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <div>
            <div class="flex items-center justify-between mb-8">
                <button
                    class="px-3 py-2 rounded-lg text-gray-700 hover:bg-white/60 transition"
                    on:click=move |_| on_back.call(())
                >
                    "← Back"
                </button>
                <h1 class="text-3xl font-bold">"Profile Details"</h1>
                <div></div>
            </div>

            <div class="p-8 bg-white/90 rounded-lg shadow">
                <div class="flex items-center space-x-6 mb-8">
                    <div class="w-20 h-20 bg-gradient-to-br from-indigo-100 to-purple-100 rounded-full flex items-center justify-center text-4xl">
                        "🦉"
                    </div>
                    <div>
                        <h2 class="text-2xl font-bold mb-2">{PROFILE.name}</h2>
                        <span class="px-3 py-1 text-sm bg-gray-100 text-gray-700 rounded-full">{PROFILE.plan}</span>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="space-y-4">
                        <DetailField label="Name" value=PROFILE.name/>
                        <DetailField label="Age" value=PROFILE.age.to_string()/>
                        <DetailField label="Email" value=PROFILE.email/>
                    </div>
                    <div class="space-y-4">
                        <DetailField label="Phone" value=PROFILE.phone/>
                        <DetailField label="Grade" value=PROFILE.grade/>
                        <DetailField label="Board" value=PROFILE.board/>
                    </div>
                </div>

                <div class="mt-8 pt-6 border-t border-gray-200">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="text-center">
                            <div class="text-2xl font-bold text-indigo-600">{PROFILE.points}</div>
                            <div class="text-sm text-gray-600">"Total Points"</div>
                        </div>
                        <div class="text-center">
                            <div class="text-2xl font-bold text-orange-500">{PROFILE.streak}</div>
                            <div class="text-sm text-gray-600">"Day Streak"</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailField(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <label class="text-sm font-medium text-gray-500">{label}</label>
            <p class="text-lg">{value}</p>
        </div>
    }
}
