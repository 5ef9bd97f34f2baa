use radio_directory_pwa::{
    components::{top::TopProperties, Top},
    utils,
};

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let config = match utils::read_config() {
        Ok(Some(config)) => config,
        Ok(None) => Default::default(),
        Err(e) => {
            log::warn!("ignoring invalid directory config: {}", e);
            Default::default()
        }
    };

    log::debug!("starting with {:?}", config);
    yew::start_app_with_props::<Top>(TopProperties { config });
}
