//! `graphicscore::drawing` submodule implements [`Renderer`] - 2D canvas that draws to a window.
//!
//! # Model
//! Renderers are the top of the following hierarchy:
//! windows are consumed by renderers,
//! renderers create textures,
//! textures can be copied to the renderer that created them.
//!
//! Hierarchy is enforced by borrows: [`Texture`]s borrow their renderer, and renderer can only be
//! turned back into its window ([`Renderer::into_window`]) after every texture has been dropped.
//! Copying texture from other renderer is a usage error.
//!
//! Drawing to a texture is scoped: [`Renderer::with_target`] redirects drawing for the duration of a closure
//! and restores previous target afterwards.
//!

use crate::{
    error::{Error, Result},
    graphicscore::{
        primitives::{BlendingType, FlipMode, LogicalPresentation},
        textures::{AccessType, Texture},
    },
    mathcore::{shapes::Rect, vectors::Vector2, Angle, Color},
    nativecore::{
        ffi::{SDL_Renderer, SDL_Texture},
        handles::{Handle, RendererKind},
        library::{native, native_ok, Sdl},
    },
    utils::Window,
};
use serde::{Deserialize, Serialize};
use std::{
    cell::Cell,
    ffi::{c_int, CString},
    fmt,
    ptr::{null, null_mut},
    sync::Arc,
};

/// [`VSync`] enum lists vertical synchronization modes of renderer.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VSync {
    /// Frames are presented immediately.
    ///
    Disabled,
    /// Frames are presented on every vertical refresh.
    ///
    #[default]
    Enabled,
    /// Late frames are presented immediately, others are synchronized.
    ///
    Adaptive,
}
impl VSync {
    /// Returns native representation of this enum.
    ///
    fn to_native(self) -> c_int {
        match self {
            VSync::Disabled => 0,
            VSync::Enabled => 1,
            VSync::Adaptive => -1,
        }
    }
}

/// [`RendererSettings`] struct configures renderer creation.
///
/// # Example
/// ```rust
/// # use ggsdl::graphicscore::{RendererSettings, VSync};
/// let settings: RendererSettings = RendererSettings {
///     driver: Some(String::from("software")),
///     ..Default::default()
/// };
/// assert_eq!(settings.vsync, VSync::Enabled);
/// ```
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// Name of rendering driver (`None` lets SDL choose the best one).
    ///
    pub driver: Option<String>,
    /// Vertical synchronization mode.
    ///
    pub vsync: VSync,
}

/// [`Renderer`] struct is a 2D canvas of a window.
///
/// Renderer consumes the window it was created for; window is returned by [`Renderer::into_window`]
/// and is closed together with renderer otherwise.
///
/// # Example
/// ```rust,no_run
/// # use ggsdl::{Engine, graphicscore::Renderer, mathcore::{Color, shapes::Rect, vectors::Vector2}};
/// let engine: Engine = Engine::load()?;
/// let window = engine.build_window("GGSDL", 800, 600, Default::default())?;
/// let renderer: Renderer = Renderer::from_window(window, Default::default())?;
///
/// renderer.set_draw_color(Color::BLACK)?;
/// renderer.clear()?;
/// renderer.set_draw_color(Color::RED)?;
/// renderer.fill_rect(Rect::new(100.0, 100.0, 50.0, 50.0))?;
/// renderer.draw_segment(Vector2 { x: 0.0, y: 0.0 }, Vector2 { x: 800.0, y: 600.0 })?;
/// renderer.present()?;
/// # Ok::<(), ggsdl::Error>(())
/// ```
///
pub struct Renderer {
    /// Native renderer (it is destroyed before its window).
    ///
    handle: Handle<RendererKind>,
    /// Current render target (null for window).
    ///
    target: Cell<*mut SDL_Texture>,
    /// Window that is drawn to.
    ///
    window: Window,
}
impl Renderer {
    /// Creates renderer for the window, consuming it.
    ///
    /// Closed window cannot be rendered to; window is closed if creation fails.
    ///
    pub fn from_window(window: Window, settings: RendererSettings) -> Result<Renderer> {
        let raw_window = window
            .raw()
            .ok_or_else(|| Error::usage("renderer cannot be created for closed window"))?;
        let driver = settings.driver.map(CString::new).transpose()?;
        let driver_pointer = driver.as_ref().map_or(null(), |driver| driver.as_ptr());

        let sdl = Arc::clone(window.sdl());
        let raw = native!(sdl, SDL_CreateRenderer(raw_window, driver_pointer))?;
        let renderer = Renderer {
            handle: Handle::owned(&sdl, "SDL_CreateRenderer", raw)?,
            target: Cell::new(null_mut()),
            window,
        };
        if let Err(error) = renderer.set_vsync(settings.vsync) {
            log::warn!("vsync mode {:?} is not supported: {error}", settings.vsync);
        }
        log::debug!("renderer was created for window {}", renderer.window.id());
        Ok(renderer)
    }
    /// Destroys renderer, returning its window.
    ///
    pub fn into_window(self) -> Window {
        let Renderer {
            mut handle, window, ..
        } = self;
        let _ = handle.release();
        window
    }

    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native pointer.
    ///
    pub(crate) fn raw(&self) -> *mut SDL_Renderer {
        self.handle.as_ptr()
    }
    /// Returns native function table.
    ///
    pub fn sdl(&self) -> &Arc<Sdl> {
        self.handle.sdl()
    }
    /// Returns window of the renderer.
    ///
    pub fn window(&self) -> &Window {
        &self.window
    }
    /// Returns window of the renderer.
    ///
    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Sets color that is used for drawing and clearing.
    ///
    pub fn set_draw_color(&self, color: Color) -> Result<()> {
        let (r, g, b, a) = color.to_rgba();
        native_ok!(self.sdl(), SDL_SetRenderDrawColor(self.raw(), r, g, b, a))
    }
    /// Returns color that is used for drawing and clearing.
    ///
    pub fn draw_color(&self) -> Result<Color> {
        let mut color = Color::BLACK;
        native_ok!(
            self.sdl(),
            SDL_GetRenderDrawColor(
                self.raw(),
                &mut color.r,
                &mut color.g,
                &mut color.b,
                &mut color.a
            )
        )?;
        Ok(color)
    }
    /// Sets blending that is applied to drawn primitives.
    ///
    pub fn set_draw_blend_mode(&self, blend_mode: BlendingType) -> Result<()> {
        native_ok!(
            self.sdl(),
            SDL_SetRenderDrawBlendMode(self.raw(), blend_mode.to_native())
        )
    }
    /// Returns blending that is applied to drawn primitives.
    ///
    pub fn draw_blend_mode(&self) -> Result<BlendingType> {
        let mut blend_mode = 0;
        native_ok!(
            self.sdl(),
            SDL_GetRenderDrawBlendMode(self.raw(), &mut blend_mode)
        )?;
        BlendingType::from_native(blend_mode)
    }

    /// Fills whole target with draw color.
    ///
    pub fn clear(&self) -> Result<()> {
        native_ok!(self.sdl(), SDL_RenderClear(self.raw()))
    }
    /// Shows everything that was drawn since the previous presentation.
    ///
    pub fn present(&self) -> Result<()> {
        native_ok!(self.sdl(), SDL_RenderPresent(self.raw()))
    }

    /// Draws point.
    ///
    pub fn draw_point(&self, point: Vector2) -> Result<()> {
        native_ok!(self.sdl(), SDL_RenderPoint(self.raw(), point.x, point.y))
    }
    /// Draws segment between two points.
    ///
    pub fn draw_segment(&self, a: Vector2, b: Vector2) -> Result<()> {
        native_ok!(self.sdl(), SDL_RenderLine(self.raw(), a.x, a.y, b.x, b.y))
    }
    /// Draws connected segments through all points.
    ///
    pub fn draw_polyline(&self, points: &[Vector2]) -> Result<()> {
        points
            .windows(2)
            .try_for_each(|segment| self.draw_segment(segment[0], segment[1]))
    }
    /// Draws outline of rectangle.
    ///
    pub fn draw_rect(&self, rect: Rect) -> Result<()> {
        let rect = rect.to_native();
        native_ok!(self.sdl(), SDL_RenderRect(self.raw(), &rect))
    }
    /// Draws filled rectangle.
    ///
    pub fn fill_rect(&self, rect: Rect) -> Result<()> {
        let rect = rect.to_native();
        native_ok!(self.sdl(), SDL_RenderFillRect(self.raw(), &rect))
    }

    /// Copies part of texture (`None` for whole texture) to part of target (`None` for whole target).
    ///
    pub fn copy(&self, texture: &Texture, source: Option<Rect>, destination: Option<Rect>) -> Result<()> {
        self.copy_ex(
            texture,
            source,
            destination,
            Angle::ZERO,
            None,
            FlipMode::None,
        )
    }
    /// Copies texture, rotating it clockwise around `center`
    /// (relative to destination, `None` for its center) and flipping it.
    ///
    pub fn copy_ex(
        &self,
        texture: &Texture,
        source: Option<Rect>,
        destination: Option<Rect>,
        angle: Angle,
        center: Option<Vector2>,
        flip: FlipMode,
    ) -> Result<()> {
        if !texture.belongs_to(self.raw()) {
            return Err(Error::usage("texture was created by other renderer"));
        }
        let source = source.map(Rect::to_native);
        let destination = destination.map(Rect::to_native);
        let center = center.map(Vector2::to_native);
        native_ok!(
            self.sdl(),
            SDL_RenderTextureRotated(
                self.raw(),
                texture.raw(),
                optional(&source),
                optional(&destination),
                f64::from(angle.degrees()),
                optional(&center),
                flip.to_native()
            )
        )
    }

    /// Sets size that is independent of output size and the way it fits into output.
    ///
    pub fn set_logical_presentation(
        &self,
        width: u32,
        height: u32,
        mode: LogicalPresentation,
    ) -> Result<()> {
        let (width, height) = match mode {
            LogicalPresentation::Disabled => (0, 0),
            _ => (
                c_int::try_from(width).map_err(|_| Error::usage("logical width is too big"))?,
                c_int::try_from(height).map_err(|_| Error::usage("logical height is too big"))?,
            ),
        };
        native_ok!(
            self.sdl(),
            SDL_SetRenderLogicalPresentation(self.raw(), width, height, mode.to_native())
        )
    }
    /// Sets vertical synchronization mode.
    ///
    pub fn set_vsync(&self, vsync: VSync) -> Result<()> {
        native_ok!(self.sdl(), SDL_SetRenderVSync(self.raw(), vsync.to_native()))
    }
    /// Sets scale of drawing.
    ///
    pub fn set_scale(&self, scale: Vector2) -> Result<()> {
        native_ok!(self.sdl(), SDL_SetRenderScale(self.raw(), scale.x, scale.y))
    }
    /// Returns size of output in pixels.
    ///
    pub fn output_size(&self) -> Result<(u32, u32)> {
        let (mut width, mut height): (c_int, c_int) = (0, 0);
        native_ok!(
            self.sdl(),
            SDL_GetRenderOutputSize(self.raw(), &mut width, &mut height)
        )?;
        Ok((width.max(0) as u32, height.max(0) as u32))
    }

    /// Redirects drawing to texture for the duration of `f`.
    ///
    /// Texture should be created by this renderer with [`AccessType::Target`];
    /// previous target is restored afterwards (scopes can be nested).
    ///
    pub fn with_target<R>(&self, texture: &Texture, f: impl FnOnce(&Renderer) -> R) -> Result<R> {
        if texture.access_type() != AccessType::Target {
            return Err(Error::usage("texture should have `Target` access type"));
        }
        if !texture.belongs_to(self.raw()) {
            return Err(Error::usage("texture was created by other renderer"));
        }
        native_ok!(self.sdl(), SDL_SetRenderTarget(self.raw(), texture.raw()))?;
        let previous = self.target.replace(texture.raw());

        let result = f(self);

        self.target.set(previous);
        native_ok!(self.sdl(), SDL_SetRenderTarget(self.raw(), previous))?;
        Ok(result)
    }
}
impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("handle", &self.handle)
            .field("window", &self.window)
            .finish()
    }
}

/// Returns pointer to optional native value (null for `None`).
///
fn optional<T>(value: &Option<T>) -> *const T {
    value.as_ref().map_or(null(), |value| value as *const T)
}
