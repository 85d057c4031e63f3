use contracts::shared::config::load_config;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal::{ModalController, ModalHost};
use crate::shared::notification::{NotificationHost, NotificationService};

/// Optional deployment override of the embedded configuration.
const CONFIG_URL: &str = "/site.toml";

async fn fetch_config_override() -> Option<String> {
    let response = match Request::get(CONFIG_URL).send().await {
        Ok(r) => r,
        Err(e) => {
            log::debug!("no configuration override: {}", e);
            return None;
        }
    };
    if !response.ok() {
        log::debug!("no configuration override: HTTP {}", response.status());
        return None;
    }
    response.text().await.ok()
}

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config(None) {
        Ok(config) => config,
        Err(e) => {
            log::error!("embedded configuration is invalid: {}", e);
            return view! { <p class="config-error">"Site configuration error"</p> }.into_any();
        }
    };

    let notifications = NotificationService::new(config.notifications.duration_ms);
    let ctx = AppGlobalContext::new(config);

    provide_context(ctx);
    provide_context(notifications);
    provide_context(ModalController::new(notifications));

    spawn_local(async move {
        let Some(doc) = fetch_config_override().await else {
            return;
        };
        match load_config(Some(&doc)) {
            Ok(config) => {
                notifications.set_duration(config.notifications.duration_ms);
                ctx.config.set(config);
            }
            Err(e) => log::warn!("configuration override ignored: {}", e),
        }
    });

    view! {
        <AppRoutes />
        <ModalHost />
        <NotificationHost />
    }
    .into_any()
}
