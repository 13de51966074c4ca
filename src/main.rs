use log::{info, warn};
use sdl2::mixer::{
    InitFlag as MixerInitFlag, Sdl2MixerContext, DEFAULT_CHANNELS, DEFAULT_FORMAT,
    DEFAULT_FREQUENCY,
};
use sdl2::AudioSubsystem;
use std::time::Duration;

mod audio;
mod config;
mod error;
mod gui;
mod input_system;
mod render;
mod resources;
mod sdl_surface;
mod text;

use audio::MenuMusic;
use config::MenuConfig;
use gui::MenuController;
use resources::{AssetTable, ResourceManager};
use sdl_surface::SdlSurface;

/// Mixer chunk size in bytes
const AUDIO_CHUNK_SIZE: i32 = 1_024;

/// Keeps the audio device open for as long as it's alive
struct AudioContext {
    _audio: AudioSubsystem,
    _mixer: Sdl2MixerContext,
}

fn init_audio(sdl_context: &sdl2::Sdl) -> Result<AudioContext, String> {
    let audio = sdl_context.audio()?;
    sdl2::mixer::open_audio(DEFAULT_FREQUENCY, DEFAULT_FORMAT, DEFAULT_CHANNELS, AUDIO_CHUNK_SIZE)?;
    let mixer = sdl2::mixer::init(MixerInitFlag::OGG | MixerInitFlag::MP3)?;

    Ok(AudioContext {
        _audio: audio,
        _mixer: mixer,
    })
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MenuConfig::load()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context =
        sdl2::image::init(sdl2::image::InitFlag::PNG | sdl2::image::InitFlag::JPG)?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    // The menu still works without sound
    let audio_context = match init_audio(&sdl_context) {
        Ok(context) => Some(context),
        Err(e) => {
            warn!("Audio unavailable, the menu will be silent: {}", e);
            None
        }
    };

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    info!("Window: {}x{}", config.window.width, config.window.height);

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let event_pump = sdl_context.event_pump()?;

    let resources = ResourceManager::new(
        &texture_creator,
        &ttf_context,
        AssetTable::new(config.assets.clone()),
    );
    let mut surface = SdlSurface::new(
        canvas,
        event_pump,
        resources,
        Duration::from_millis(config.frame_delay_ms),
    );

    let music = match audio_context {
        Some(_) => MenuMusic::open(&config.music.path, config.music.volume),
        None => MenuMusic::silent(),
    };

    if music.is_silent() {
        info!("No menu music");
    }

    let mut menu = MenuController::new(&mut surface, music)?;

    if menu.run()? {
        info!("Window closed, exiting");
        return Ok(());
    }

    // Gameplay takes over from here
    info!("Selected difficulty: {:?}", menu.selected_difficulty());

    Ok(())
}
