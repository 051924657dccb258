use aether_site::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
