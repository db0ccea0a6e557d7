use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    #[allow(unused_variables)]
    let navigate = leptos_router::hooks::use_navigate();

    let signOut = move |_| {
        #[cfg(feature = "hydrate")]
        {
            // A storage failure still leaves the user on the login page.
            let _ = crate::api::console_client().logout();
            navigate("/", Default::default());
        }
    };

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"L"</div>
                <span class="brand-text">"Ludo Admin"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item active">
                    <a href="/dashboard">
                        <span class="nav-icon">"\u{25A3}"</span>
                        <span>"Dashboard"</span>
                    </a>
                </li>
                <li class="nav-item">
                    <button class="nav-button" on:click=signOut>
                        <span class="nav-icon">"\u{238B}"</span>
                        <span>"Sign out"</span>
                    </button>
                </li>
            </ul>
        </nav>
    }
}
