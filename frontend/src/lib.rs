use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

pub mod config;
pub mod carousel;
pub mod contact;
pub mod content;
pub mod dom;
pub mod reveal;
pub mod components {
    pub mod contact_form;
    pub mod fade_in;
    pub mod nav;
    pub mod testimonials;
}
pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::nav::Nav;
use pages::{
    landing::{Landing, GLOBAL_CSS},
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{GLOBAL_CSS}</style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
