use leptos::prelude::*;

pub const LOGIN_FAILED: &str = "Login failed";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, setUsername) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    #[allow(unused_variables)]
    let (message, setMessage) = signal(String::new());
    #[allow(unused_variables)]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let user = username.get_untracked();
            let pass = password.get_untracked();
            let navigate = navigate.clone();
            spawn_local(async move {
                match crate::api::console_client().login(&user, &pass).await {
                    Ok(_) => navigate("/dashboard", Default::default()),
                    Err(_) => setMessage.set(LOGIN_FAILED.to_string()),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"L"</div>
                    <h1>"Ludo Admin"</h1>
                    <p>"Sign in to the admin panel"</p>
                </div>

                <form on:submit=submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            prop:value=username
                            on:input=move |ev| setUsername.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            prop:value=password
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        "Login"
                    </button>
                </form>

                <p id="msg" class="login-error">{move || message.get()}</p>
            </div>
        </div>
    }
}
