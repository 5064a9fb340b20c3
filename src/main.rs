use stayflow::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 StayFlow arrancando...");

    yew::Renderer::<App>::new().render();
}
