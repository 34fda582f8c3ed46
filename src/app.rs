use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::core::FormMode;
use crate::ui::pages::{HomePage, NotFoundPage, ReviewPage};
use crate::ui::{
    ClientSettingsMeta, CredentialModal, Navbar, NotificationsContainer, provide_client_settings,
    provide_notifications, provide_session_context,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <ClientSettingsMeta/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The session token lives here, outside the credential form
    provide_session_context();

    // Auth API endpoints, from the request context or the page head
    provide_client_settings();
    provide_notifications();

    // Open mode of the credential modal, None while closed
    let form_mode = RwSignal::new(None::<FormMode>);
    let open_form = Callback::new(move |mode: FormMode| form_mode.set(Some(mode)));

    view! {
        <Title text="YoungchaPedia"/>

        <Router>
            <Navbar on_open_form=open_form/>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("review") view=ReviewPage/>
                </Routes>
            </main>
            <CredentialModal form_mode=form_mode/>
            <NotificationsContainer/>
        </Router>
    }
}
