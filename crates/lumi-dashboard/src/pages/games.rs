//! Brain Rush games catalog

use leptos::*;

use crate::components::use_reveal;

struct Game {
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    tile: &'static str,
}

static GAMES: [Game; 5] = [
    Game {
        id: "chess",
        title: "Chess",
        icon: "♛",
        description: "Strategic mind game",
        tile: "bg-purple-100 text-purple-600",
    },
    Game {
        id: "sudoku",
        title: "Sudoku",
        icon: "🔢",
        description: "Number puzzle",
        tile: "bg-blue-100 text-blue-600",
    },
    Game {
        id: "sequences",
        title: "Sequences",
        icon: "⚡",
        description: "Pattern recognition",
        tile: "bg-green-100 text-green-600",
    },
    Game {
        id: "crossword",
        title: "Crossword",
        icon: "🧩",
        description: "Word puzzle",
        tile: "bg-yellow-100 text-yellow-600",
    },
    Game {
        id: "matching",
        title: "Matching Cards",
        icon: "🎯",
        description: "Memory game",
        tile: "bg-pink-100 text-pink-600",
    },
];

#[component]
pub fn GamesPage() -> impl IntoView {
    let (selected, set_selected) = create_signal(None::<&'static Game>);

    view! {
        <div class="flex-1 p-6 overflow-auto bg-gradient-to-br from-indigo-50 to-purple-50">
            <div class="max-w-4xl mx-auto">
                {move || match selected.get() {
                    Some(game) => view! {
                        <GameDetail game=game on_back=move |_| set_selected.set(None)/>
                    }
                    .into_view(),
                    None => view! {
                        <Catalog on_pick=move |game: &'static Game| set_selected.set(Some(game))/>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Catalog(#[prop(into)] on_pick: Callback<&'static Game>) -> impl IntoView {
    let state = use_reveal("game-grid", 0.2);

    view! {
        <div>
            <div class="text-center mb-8">
                <div class="flex items-center justify-center space-x-3 mb-4">
                    <div class="w-16 h-16 bg-white rounded-full flex items-center justify-center text-3xl shadow">
                        "🦉"
                    </div>
                    <div class="text-left">
                        <h1 class="text-4xl font-bold">
                            "BRAIN " <span class="text-indigo-600">"RUSH"</span>
                        </h1>
                        <p class="text-lg text-gray-600 mt-2">
                            "Challenge your brain with Lumi - every point you earn is a win!"
                        </p>
                    </div>
                </div>
            </div>

            <div
                id="game-grid"
                class=move || format!(
                    "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 transition-all duration-700 {}",
                    if state.get().visible { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-4" },
                )
            >
                {GAMES.iter().map(|game| view! {
                    <button
                        class="bg-white rounded-lg shadow p-6 hover:shadow-xl hover:scale-105 transition-all duration-300 text-left"
                        on:click=move |_| on_pick.call(game)
                    >
                        <div class="flex flex-col items-center text-center space-y-4">
                            <div class=format!("w-16 h-16 rounded-2xl flex items-center justify-center text-3xl {}", game.tile)>
                                {game.icon}
                            </div>
                            <div>
                                <h3 class="font-bold text-lg mb-1">{game.title}</h3>
                                <p class="text-sm text-gray-600">{game.description}</p>
                            </div>
                            <span class="mt-2 px-4 py-1 bg-gray-100 rounded-full text-sm font-medium">"Play Now"</span>
                        </div>
                    </button>
                }).collect::<Vec<_>>()}
            </div>

            // Stats
            <div class="mt-8 bg-white rounded-lg shadow p-6">
                <h3 class="font-bold text-lg mb-4">"Your Stats"</h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <GameStat value="15" label="Games Played" tone="text-indigo-600"/>
                    <GameStat value="12" label="Games Won" tone="text-green-600"/>
                    <GameStat value="150" label="High Score" tone="text-yellow-600"/>
                    <GameStat value="7" label="Day Streak" tone="text-purple-600"/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn GameDetail(game: &'static Game, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <div>
            <div class="flex items-center justify-between mb-8">
                <div class="flex items-center space-x-4">
                    <button
                        class="px-3 py-2 rounded-lg text-gray-700 hover:bg-white/60 transition"
                        on:click=move |_| on_back.call(())
                    >
                        "← Back"
                    </button>
                    <h1 class="text-3xl font-bold">{game.title}</h1>
                </div>
                <div class="flex items-center space-x-2">
                    <span class="text-yellow-500">"🏆"</span>
                    <span class="text-sm font-medium">"High Score: 150"</span>
                </div>
            </div>

            <div class="bg-white/90 rounded-lg shadow p-8">
                <div class="text-center space-y-4">
                    <div class="w-20 h-20 bg-indigo-600/10 rounded-full flex items-center justify-center mx-auto text-4xl">
                        {game.icon}
                    </div>
                    <h2 class="text-2xl font-bold">"Game Starting Soon..."</h2>
                    <p class="text-gray-600">
                        "Get ready to challenge your brain with " {game.title} "!"
                    </p>
                    <button class="mt-4 px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">
                        "Start Game"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn GameStat(value: &'static str, label: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class=format!("text-2xl font-bold {tone}")>{value}</div>
            <div class="text-sm text-gray-600">{label}</div>
        </div>
    }
}
