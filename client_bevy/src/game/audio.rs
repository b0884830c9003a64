use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use soccer_shared::ports::SoundPlayer;

use super::core::Settings;

pub struct SoundPlugin;

#[derive(Resource, Default)]
pub(crate) struct KickSound {
    /// `None` when no sound file is configured.
    pub(crate) handle: Option<Handle<AudioSource>>,
}

/// A kick sound that is currently playing.
#[derive(Component)]
pub(crate) struct KickSoundInstance;

#[derive(SystemParam)]
pub(crate) struct KickAudio<'w, 's> {
    commands: Commands<'w, 's>,
    sound: Res<'w, KickSound>,
    playing: Query<'w, 's, Entity, With<KickSoundInstance>>,
}

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KickSound>()
            .add_systems(Startup, load_kick_sound);
    }
}

fn load_kick_sound(
    asset_server: Res<AssetServer>,
    settings: Res<Settings>,
    mut kick: ResMut<KickSound>,
) {
    let Some(path) = settings.0.kick_sound_path.as_ref() else {
        info!("No kick sound configured, kicks are silent");
        return;
    };
    // A missing file is reported by the asset server; kicks then stay silent.
    kick.handle = Some(asset_server.load(path.clone()));
}

/// Plays kicks by spawning one-shot audio entities. Any kick still sounding
/// is stopped first so every kick starts the effect from the top.
pub(crate) struct KickSounds<'a, 'w, 's> {
    audio: &'a mut KickAudio<'w, 's>,
    /// Spawned during this tick, not yet visible to the `playing` query.
    pending: Option<Entity>,
}

impl<'a, 'w, 's> KickSounds<'a, 'w, 's> {
    pub(crate) fn new(audio: &'a mut KickAudio<'w, 's>) -> Self {
        Self {
            audio,
            pending: None,
        }
    }
}

impl SoundPlayer for KickSounds<'_, '_, '_> {
    fn play_kick(&mut self) {
        let audio = &mut *self.audio;
        let Some(handle) = audio.sound.handle.clone() else {
            return;
        };
        for entity in audio.playing.iter().chain(self.pending.take()) {
            audio.commands.entity(entity).try_despawn();
        }
        let entity = audio
            .commands
            .spawn((
                AudioPlayer::new(handle),
                PlaybackSettings::DESPAWN,
                KickSoundInstance,
            ))
            .id();
        self.pending = Some(entity);
    }
}
