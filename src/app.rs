use std::rc::Rc;
use yew::prelude::*;
use crate::config;
use crate::pages;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| config::load());

    html! {
        <main class="container">
            <pages::home::HomePage config={Rc::clone(&config)} />
        </main>
    }
}
