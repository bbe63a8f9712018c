mod app;
mod audio;
mod components;
mod config;
mod pages;
mod playback;
mod snowfall;
mod timeline;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
