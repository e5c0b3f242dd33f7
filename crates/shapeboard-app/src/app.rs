//! Application state and the winit event loop.

use std::sync::Arc;

use shapeboard_core::ShapeBoard;
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::gpu::GpuState;
use crate::input::BoardInput;
use crate::ui::{render_ui, UiAction, UiOutput, UiState};

#[cfg(target_arch = "wasm32")]
type PendingGpu = std::rc::Rc<std::cell::RefCell<Option<Result<GpuState, AppError>>>>;

/// Runtime state for the application.
struct AppState {
    window: Arc<Window>,
    gpu: GpuState,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    ui_state: UiState,

    board: ShapeBoard,
    config: AppConfig,
}

impl AppState {
    /// Run one UI pass, apply its output to the board, and present.
    fn redraw(&mut self) {
        let raw_input = self.egui_state.take_egui_input(&self.window);

        let mut output = UiOutput::default();
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            output = render_ui(ctx, &self.board, &self.ui_state, &self.config);
        });
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let clear = clear_color(&self.config);
        if let Err(e) = self.gpu.render(
            &primitives,
            &full_output.textures_delta,
            full_output.pixels_per_point,
            clear,
        ) {
            log::warn!("Frame dropped: {}", e);
        }

        apply_output(&mut self.board, &mut self.ui_state, output);

        let egui_wants_repaint = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());
        if self.board.take_repaint() || egui_wants_repaint {
            self.window.request_redraw();
        }
    }
}

/// Feed one frame of UI output into the board: container size first, then
/// input in arrival order, then control actions.
fn apply_output(board: &mut ShapeBoard, ui_state: &mut UiState, output: UiOutput) {
    if let Some(size) = output.container {
        if let Err(e) = board.resize(size) {
            log::warn!("Container not usable: {}", e);
        }
    }

    for input in output.inputs {
        match input {
            BoardInput::Pointer(event) => {
                board.handle_pointer(event);
            }
            BoardInput::Key(event) => {
                board.handle_key(&event);
            }
        }
    }

    if let Some(UiAction::AddCircle) = output.action {
        match board.handle_add() {
            Ok(_) => ui_state.status = None,
            Err(e) => ui_state.status = Some(e.to_string()),
        }
    }
}

fn clear_color(config: &AppConfig) -> wgpu::Color {
    let c = config.background_color;
    wgpu::Color {
        r: c.r as f64 / 255.0,
        g: c.g as f64 / 255.0,
        b: c.b as f64 / 255.0,
        a: c.a as f64 / 255.0,
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    #[cfg(target_arch = "wasm32")]
    pending_gpu: PendingGpu,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            pending_gpu: PendingGpu::default(),
        }
    }

    /// Run the application until the window closes.
    pub fn run(config: AppConfig) -> Result<(), AppError> {
        config.board.validate()?;
        let event_loop = EventLoop::new()?;
        let app = App::with_config(config);

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::EventLoopExtWebSys;
            event_loop.spawn_app(app);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut app = app;
            event_loop.run_app(&mut app)?;
        }

        Ok(())
    }

    /// Finish initialization once the GPU surface exists.
    fn finish_init(&mut self, window: Arc<Window>, gpu: GpuState) -> Result<(), AppError> {
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let board = ShapeBoard::new(self.config.board.clone())?;
        let (width, height) = gpu.size();
        log::info!("ShapeBoard initialized - {}x{}", width, height);

        self.state = Some(AppState {
            window: window.clone(),
            gpu,
            egui_ctx,
            egui_state,
            ui_state: UiState::default(),
            board,
            config: self.config.clone(),
        });
        self.pending_window = None;

        window.request_redraw();
        Ok(())
    }

    fn window_attributes(&self) -> winit::window::WindowAttributes {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Window::default_attributes()
                .with_title(&self.config.title)
                .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
        }

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::WindowAttributesExtWebSys;

            let canvas = crate::web::attach_canvas();
            Window::default_attributes()
                .with_title(&self.config.title)
                .with_canvas(canvas)
                .with_prevent_default(self.config.prevent_default_keys)
        }
    }

    /// Pick up the GPU state produced by the async initializer (WASM only).
    #[cfg(target_arch = "wasm32")]
    fn poll_pending_gpu(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.pending_window.clone() else {
            return;
        };
        let ready = self.pending_gpu.borrow_mut().take();
        match ready {
            Some(Ok(gpu)) => {
                if let Err(e) = self.finish_init(window, gpu) {
                    log::error!("{}", e);
                    event_loop.exit();
                }
            }
            Some(Err(e)) => {
                log::error!("{}", e);
                event_loop.exit();
            }
            None => window.request_redraw(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() {
            return;
        }

        let window = match event_loop.create_window(self.window_attributes()) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("{}", AppError::from(e));
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Window created, surface {}x{}", width, height);

        // On native, block on surface creation
        #[cfg(not(target_arch = "wasm32"))]
        {
            let result = pollster::block_on(GpuState::new(window.clone(), width, height))
                .and_then(|gpu| self.finish_init(window, gpu));
            if let Err(e) = result {
                log::error!("{}", e);
                event_loop.exit();
            }
        }

        // On WASM, the surface is created asynchronously and picked up later
        #[cfg(target_arch = "wasm32")]
        {
            let slot = self.pending_gpu.clone();
            let async_window = window.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = GpuState::new(async_window, width, height).await;
                *slot.borrow_mut() = Some(result);
            });
            self.pending_window = Some(window.clone());
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        #[cfg(target_arch = "wasm32")]
        if self.state.is_none() {
            self.poll_pending_gpu(event_loop);
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        let response = state.egui_state.on_window_event(&state.window, &event);
        if response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                state.board.unmount();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                state.gpu.resize(size.width, size.height);
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                state.redraw();
            }

            _ => {}
        }
    }
}
