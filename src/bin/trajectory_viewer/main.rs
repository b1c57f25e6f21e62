mod app;
mod constants;
mod render;

fn main() {
    let launch = match app::prepare() {
        Ok(launch) => launch,
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    };
    macroquad::Window::from_config(app::window_conf(), app::run(launch));
}
