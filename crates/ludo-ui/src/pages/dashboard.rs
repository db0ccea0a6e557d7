use leptos::prelude::*;

use crate::components::panel::Panel;

/// Which panel a request result is written into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    Stats,
    Users,
    Games,
}

impl PanelKind {
    pub fn output_id(self) -> &'static str {
        match self {
            PanelKind::Stats => "stats",
            PanelKind::Users => "users",
            PanelKind::Games => "games",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PanelKind::Stats => "Dashboard Stats",
            PanelKind::Users => "User Search",
            PanelKind::Games => "Active Games",
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (statsText, setStatsText) = signal(String::new());
    #[allow(unused_variables)]
    let (usersText, setUsersText) = signal(String::new());
    #[allow(unused_variables)]
    let (gamesText, setGamesText) = signal(String::new());
    let (uid, setUid) = signal(String::new());

    let loadDashboard = move || {
        #[cfg(feature = "hydrate")]
        {
            use ludo_client::render_result;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                let result = crate::api::console_client().stats().await;
                setStatsText.set(render_result(&result));
            });
        }
    };

    let searchUser = move || {
        #[cfg(feature = "hydrate")]
        {
            use ludo_client::render_result;
            use wasm_bindgen_futures::spawn_local;

            let userId = uid.get_untracked();
            spawn_local(async move {
                let result = crate::api::console_client().search_users(&userId).await;
                setUsersText.set(render_result(&result));
            });
        }
    };

    let loadGames = move || {
        #[cfg(feature = "hydrate")]
        {
            use ludo_client::render_result;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                let result = crate::api::console_client().active_games().await;
                setGamesText.set(render_result(&result));
            });
        }
    };

    // Stats load once on mount; the other panels wait for their buttons.
    Effect::new(move |_| loadDashboard());

    view! {
        <div class="dashboard-header">
            <h1>"Dashboard"</h1>
            <p class="subtitle">"Ludo bot admin panel"</p>
        </div>
        <div class="dashboard-grid">
            <Panel
                title=PanelKind::Stats.title().to_string()
                output_id=PanelKind::Stats.output_id()
                text=statsText
            >
                <button class="btn" on:click=move |_| loadDashboard()>
                    "Refresh"
                </button>
            </Panel>

            <Panel
                title=PanelKind::Users.title().to_string()
                output_id=PanelKind::Users.output_id()
                text=usersText
            >
                <input
                    type="text"
                    id="uid"
                    placeholder="User ID"
                    prop:value=uid
                    on:input=move |ev| setUid.set(event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| searchUser()>
                    "Search"
                </button>
            </Panel>

            <Panel
                title=PanelKind::Games.title().to_string()
                output_id=PanelKind::Games.output_id()
                text=gamesText
            >
                <button class="btn" on:click=move |_| loadGames()>
                    "Load"
                </button>
            </Panel>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_ids_match_output_elements() {
        assert_eq!(PanelKind::Stats.output_id(), "stats");
        assert_eq!(PanelKind::Users.output_id(), "users");
        assert_eq!(PanelKind::Games.output_id(), "games");
    }
}
