//! Audio cues using the Web Audio API
//!
//! Procedurally generated blips - no sound files. Cues are fire-and-forget:
//! the simulation buffers [`CueEvent`]s and the shell drains them into the
//! [`AudioManager`]; playback failure never touches simulation state.

/// Named sound cues emitted by the games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Avatar jump impulse
    Jump,
    /// Obstacle pair passed
    Score,
    /// Run-ending impact
    Hit,
    /// Terminal fall / run lost
    Die,
    /// Resource pickup collected
    Collect,
    /// Unit placed on the grid
    Place,
    /// Ranged unit fires
    Shoot,
    /// Hostile bites a unit
    Eat,
    /// Detonating unit goes off
    Explode,
}

/// A cue plus an optional playback delay on the audio clock. The delayed
/// variant backs the secondary death cue; scheduling lives entirely in the
/// audio layer so a world reset cannot be affected by it.
#[derive(Debug, Clone, Copy)]
pub struct CueEvent {
    pub cue: Cue,
    pub delay_secs: f64,
}

impl CueEvent {
    pub fn now(cue: Cue) -> Self {
        Self {
            cue,
            delay_secs: 0.0,
        }
    }

    pub fn after(cue: Cue, delay_secs: f64) -> Self {
        Self { cue, delay_secs }
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::Cue;
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        muted: bool,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: 0.8,
                muted: false,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        pub fn play(&self, cue: Cue) {
            self.play_delayed(cue, 0.0);
        }

        /// Play a cue `delay_secs` from now on the AudioContext clock.
        pub fn play_delayed(&self, cue: Cue, delay_secs: f64) {
            if self.muted || self.master_volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
            let t = ctx.current_time() + delay_secs;
            let vol = self.master_volume;
            match cue {
                Cue::Jump => self.play_jump(ctx, vol, t),
                Cue::Score => self.play_score(ctx, vol, t),
                Cue::Hit => self.play_hit(ctx, vol, t),
                Cue::Die => self.play_die(ctx, vol, t),
                Cue::Collect => self.play_collect(ctx, vol, t),
                Cue::Place => self.play_place(ctx, vol, t),
                Cue::Shoot => self.play_shoot(ctx, vol, t),
                Cue::Eat => self.play_eat(ctx, vol, t),
                Cue::Explode => self.play_explode(ctx, vol, t),
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Jump - quick rising chirp
        fn play_jump(&self, ctx: &AudioContext, vol: f32, t: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Sine) else {
                return;
            };
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(300.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(600.0, t + 0.1)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Score - bright two-step ping
        fn play_score(&self, ctx: &AudioContext, vol: f32, t: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, 880.0, OscillatorType::Triangle) else {
                return;
            };
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                .ok();
            osc.frequency().set_value_at_time(880.0, t).ok();
            osc.frequency().set_value_at_time(1320.0, t + 0.08).ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.22).ok();
        }

        /// Hit - solid low thump
        fn play_hit(&self, ctx: &AudioContext, vol: f32, t: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Sine) else {
                return;
            };
            gain.gain().set_value_at_time(vol * 0.6, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(150.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.1)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Die - descending wail
        fn play_die(&self, ctx: &AudioContext, vol: f32, t: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sawtooth) else {
                return;
            };
            gain.gain().set_value_at_time(vol * 0.35, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                .ok();
            osc.frequency().set_value_at_time(400.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(80.0, t + 0.45)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.5).ok();
        }

        /// Collect - sparkly double ping
        fn play_collect(&self, ctx: &AudioContext, vol: f32, t: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, 1047.0, OscillatorType::Triangle) else {
                return;
            };
            gain.gain().set_value_at_time(vol * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                .ok();
            osc.frequency().set_value_at_time(1047.0, t).ok();
            osc.frequency().set_value_at_time(1568.0, t + 0.06).ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.18).ok();
        }

        /// Place - soft earthy thud
        fn play_place(&self, ctx: &AudioContext, vol: f32, t: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sine) else {
                return;
            };
            gain.gain().set_value_at_time(vol * 0.35, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(110.0, t + 0.1)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Shoot - short square blip
        fn play_shoot(&self, ctx: &AudioContext, vol: f32, t: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, 520.0, OscillatorType::Square) else {
                return;
            };
            gain.gain().set_value_at_time(vol * 0.15, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.06)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.08).ok();
        }

        /// Eat - low munch
        fn play_eat(&self, ctx: &AudioContext, vol: f32, t: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, 140.0, OscillatorType::Sawtooth) else {
                return;
            };
            gain.gain().set_value_at_time(vol * 0.2, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(140.0, t).ok();
            osc.frequency().set_value_at_time(100.0, t + 0.05).ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.12).ok();
        }

        /// Explode - rumbling boom
        fn play_explode(&self, ctx: &AudioContext, vol: f32, t: f64) {
            if let Some((osc, gain)) = self.create_osc(ctx, 120.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.5, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                    .ok();
                osc.frequency().set_value_at_time(120.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(30.0, t + 0.45)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.5).ok();
            }
            if let Some((osc, gain)) = self.create_osc(ctx, 60.0, OscillatorType::Square) {
                gain.gain().set_value_at_time(vol * 0.2, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.3).ok();
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use super::Cue;

    /// Native stub - cues are logged, nothing plays.
    #[derive(Default)]
    pub struct AudioManager {
        muted: bool,
    }

    impl AudioManager {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn resume(&self) {}

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        pub fn play(&self, cue: Cue) {
            self.play_delayed(cue, 0.0);
        }

        pub fn play_delayed(&self, cue: Cue, delay_secs: f64) {
            if !self.muted {
                log::debug!("cue {:?} (+{:.2}s)", cue, delay_secs);
            }
        }
    }
}

pub use backend::AudioManager;
