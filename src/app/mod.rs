//! Application Shell
//!
//! [`IntroApp`] wires the pieces together: it opens the window, initializes
//! the GPU context, starts the font fetch, and drives the sequence from the
//! winit event loop. When the sequence reaches a terminal state the runner
//! releases every rendering resource it acquired, *then* fires the
//! completion callback, then exits the event loop. The host always hears
//! back exactly once, whether the run finished, failed to load its font, or
//! was cancelled by closing the window.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::assets::{self, Font};
use crate::config::IntroConfig;
use crate::errors::{IntroError, Result};
use crate::render::{DEPTH_FORMAT, LetterPass, WgpuContext};
use crate::scene::{OverlayCamera, Scene, Viewport};
use crate::sequence::{IntroOutcome, IntroSequence, StageKind};

/// Completion notification. Invoked at most once, after teardown.
pub type CompletionCallback = Box<dyn FnOnce(IntroOutcome)>;

/// Builder for one intro run.
///
/// # Example
///
/// ```rust,ignore
/// IntroApp::new(IntroConfig::default())
///     .with_on_complete(|outcome| log::info!("intro: {outcome:?}"))
///     .run()?;
/// ```
pub struct IntroApp {
    config: IntroConfig,
    on_complete: Option<CompletionCallback>,
}

impl IntroApp {
    #[must_use]
    pub fn new(config: IntroConfig) -> Self {
        Self {
            config,
            on_complete: None,
        }
    }

    /// Sets the completion notification.
    #[must_use]
    pub fn with_on_complete(mut self, f: impl FnOnce(IntroOutcome) + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Runs the intro. Blocks until the sequence reaches a terminal state
    /// or the window is closed.
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::new(self.config, self.on_complete);
        event_loop.run_app(&mut runner)?;

        if let Some(error) = runner.fatal.take() {
            return Err(error);
        }
        Ok(())
    }
}

impl Default for IntroApp {
    fn default() -> Self {
        Self::new(IntroConfig::default())
    }
}

/// Internal event-loop handler owning every resource of the run.
struct AppRunner {
    config: IntroConfig,
    on_complete: Option<CompletionCallback>,

    window: Option<Arc<Window>>,
    context: Option<WgpuContext>,
    letter_pass: Option<LetterPass>,

    scene: Scene,
    camera: OverlayCamera,
    viewport: Viewport,
    sequence: IntroSequence,

    font_rx: Option<flume::Receiver<Result<Font>>>,
    start_time: Instant,
    hittest_disabled: bool,
    fatal: Option<IntroError>,
}

impl AppRunner {
    fn new(config: IntroConfig, on_complete: Option<CompletionCallback>) -> Self {
        let viewport = Viewport::new(1280.0, 720.0);
        let mut scene = Scene::new();
        scene.background = glam::Vec4::new(
            config.clear_color.r as f32,
            config.clear_color.g as f32,
            config.clear_color.b as f32,
            config.clear_color.a as f32,
        );

        Self {
            sequence: IntroSequence::new(config.clone()),
            config,
            on_complete,
            window: None,
            context: None,
            letter_pass: None,
            scene,
            camera: OverlayCamera::new(viewport),
            viewport,
            font_rx: None,
            start_time: Instant::now(),
            hittest_disabled: false,
            fatal: None,
        }
    }

    fn elapsed(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }

    /// Releases rendering resources, then fires the completion callback,
    /// then exits the event loop, strictly in that order.
    fn teardown(&mut self, event_loop: &ActiveEventLoop, outcome: Option<IntroOutcome>) {
        self.letter_pass = None;
        self.context = None;
        self.font_rx = None;
        self.window = None;

        if let Some(outcome) = outcome {
            log::info!("Intro run ended: {outcome:?}");
            if let Some(callback) = self.on_complete.take() {
                callback(outcome);
            }
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.elapsed();

        // Font channel: at most one message ever arrives.
        let font_result = self.font_rx.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(result) = font_result {
            self.font_rx = None;
            let outcome = match result {
                Ok(font) => {
                    let outcome = self.sequence.on_font_loaded(&mut self.scene, &font, now);
                    if outcome.is_none()
                        && let (Some(context), Some(pass)) = (&self.context, &mut self.letter_pass)
                    {
                        pass.upload_letters(&context.device, &context.queue, &self.scene);
                    }
                    outcome
                }
                Err(error) => self.sequence.on_font_failed(&error),
            };
            if outcome.is_some() {
                self.teardown(event_loop, outcome);
                return;
            }
        }

        let outcome = self.sequence.advance(&mut self.scene, self.viewport, now);

        // Native analog of `pointer-events: none` once the fade begins.
        if self.sequence.stage() == StageKind::Fade && !self.hittest_disabled {
            if let Some(window) = &self.window {
                let _ = window.set_cursor_hittest(false);
            }
            self.hittest_disabled = true;
        }

        if outcome.is_some() {
            self.teardown(event_loop, outcome);
            return;
        }

        if let (Some(context), Some(pass)) = (&mut self.context, &self.letter_pass) {
            context.clear_color = wgpu::Color {
                r: f64::from(self.scene.background.x),
                g: f64::from(self.scene.background.y),
                b: f64::from(self.scene.background.z),
                a: f64::from(self.scene.background.w),
            };
            pass.prepare(&context.queue, &self.camera, &self.scene);
            context.render_frame(pass);
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for AppRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let mut attributes = Window::default_attributes().with_title(self.config.word.clone());
        if self.config.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        } else {
            attributes = attributes.with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));
        }

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                self.fatal = Some(e.into());
                self.teardown(event_loop, Some(IntroOutcome::Cancelled));
                return;
            }
        };

        let size = window.inner_size();
        self.viewport = Viewport::new(size.width as f32, size.height as f32);
        self.camera.set_viewport(self.viewport);

        log::info!("Initializing GPU context...");
        match pollster::block_on(WgpuContext::new(
            window.clone(),
            &self.config,
            size.width.max(1),
            size.height.max(1),
        )) {
            Ok(context) => {
                self.letter_pass = Some(LetterPass::new(
                    &context.device,
                    context.color_format(),
                    DEPTH_FORMAT,
                    self.config.letter_color,
                ));
                self.context = Some(context);
            }
            Err(e) => {
                log::error!("Fatal GPU error: {e}");
                self.fatal = Some(e);
                self.teardown(event_loop, Some(IntroOutcome::Cancelled));
                return;
            }
        }

        self.window = Some(window);
        self.font_rx = Some(assets::load_font(&self.config.font_source));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.sequence.cancel_token().cancel();
                let now = self.elapsed();
                let outcome = self.sequence.advance(&mut self.scene, self.viewport, now);
                self.teardown(event_loop, outcome);
            }
            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.context {
                    context.resize(size.width, size.height);
                }
                self.viewport = Viewport::new(size.width as f32, size.height as f32);
                self.camera.set_viewport(self.viewport);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
