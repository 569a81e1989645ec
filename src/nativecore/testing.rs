//! `nativecore::testing` submodule implements in-process fake of native function table.
//!
//! Fake keeps its state in thread locals, so every test (which runs on its own thread)
//! observes only its own native calls.
//!

#![allow(non_snake_case, unreachable_pub, missing_docs, clippy::missing_docs_in_private_items)]

use crate::nativecore::{
    ffi::*,
    library::{NativeApi, Sdl},
    properties,
};
use sdl3_sys::everything::SDL_PixelFormat;
use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet, VecDeque},
    ffi::{c_char, c_int, c_void, CStr, CString},
    mem::zeroed,
    ptr::{null, null_mut, NonNull},
    sync::Arc,
};

/// Message that fake `SDL_GetError` returns.
///
pub const FAKE_ERROR: &str = "fake native failure";
/// Identifier of every fake window.
///
pub const FAKE_WINDOW_ID: SDL_WindowID = 7;
/// Output size of every fake renderer.
///
pub const FAKE_OUTPUT_SIZE: (c_int, c_int) = (1600, 900);

#[derive(Clone, Debug)]
enum Value {
    Bool(bool),
    Number(i64),
    Float(f32),
    String(CString),
    Pointer(*mut c_void),
}

#[derive(Debug)]
struct FakeTexture {
    w: c_int,
    h: c_int,
    color: (u8, u8, u8),
    alpha: u8,
    blend: u32,
}
#[derive(Debug)]
struct FakeFont {
    size: f32,
    style: u32,
}
#[derive(Debug, Default)]
struct FakeMenu {
    entries: Vec<*mut FakeEntry>,
    listing: Vec<*const SDL_TrayEntry>,
}
#[derive(Debug)]
struct FakeEntry {
    parent: *mut FakeMenu,
    label: Option<CString>,
    flags: u32,
    checked: bool,
    enabled: bool,
    callback: SDL_TrayCallback,
    userdata: *mut c_void,
    submenu: *mut FakeMenu,
}
#[derive(Debug)]
struct FakeTray {
    menu: *mut FakeMenu,
}

thread_local! {
    static CALLS: RefCell<HashMap<&'static str, usize>> = RefCell::new(HashMap::new());
    static FAILING: RefCell<HashSet<&'static str>> = RefCell::new(HashSet::new());

    static PROPERTIES: RefCell<HashMap<SDL_PropertiesID, HashMap<String, Value>>> = RefCell::new(HashMap::new());
    static NEXT_PROPERTIES: Cell<SDL_PropertiesID> = const { Cell::new(1) };

    static WINDOW_FLAGS: Cell<u64> = const { Cell::new(0) };
    static WINDOW_TITLE: RefCell<CString> = RefCell::new(CString::default());
    static WINDOW_POSITION: Cell<(c_int, c_int)> = const { Cell::new((0, 0)) };
    static WINDOW_SIZE: Cell<(c_int, c_int)> = const { Cell::new((0, 0)) };
    static WINDOW_MINIMUM_SIZE: Cell<(c_int, c_int)> = const { Cell::new((0, 0)) };
    static WINDOW_MAXIMUM_SIZE: Cell<(c_int, c_int)> = const { Cell::new((0, 0)) };
    static WINDOW_OPACITY: Cell<f32> = const { Cell::new(1.0) };
    static PROGRESS_STATE: Cell<c_int> = const { Cell::new(0) };
    static PROGRESS_VALUE: Cell<f32> = const { Cell::new(0.0) };

    static EVENTS: RefCell<VecDeque<SDL_Event>> = RefCell::new(VecDeque::new());
    static NEXT_USER_EVENT: Cell<u32> = const { Cell::new(0x8000) };

    static CURSOR_VISIBLE: Cell<bool> = const { Cell::new(true) };
    static DIALOG_SELECTION: RefCell<Vec<CString>> = RefCell::new(Vec::new());
    static TRAY_TOOLTIP: RefCell<Option<String>> = const { RefCell::new(None) };

    static DRAW_COLOR: Cell<(u8, u8, u8, u8)> = const { Cell::new((0, 0, 0, 255)) };
    static DRAW_BLEND: Cell<u32> = const { Cell::new(0) };
    static RENDER_TARGET: Cell<*mut SDL_Texture> = const { Cell::new(null_mut()) };
}

/// Returns how many times native function was called on this thread.
///
pub fn calls(name: &str) -> usize {
    CALLS.with(|calls| calls.borrow().get(name).copied().unwrap_or(0))
}
/// Makes native function fail on this thread.
///
pub fn fail(name: &'static str) {
    let _ = FAILING.with(|failing| failing.borrow_mut().insert(name));
}
/// Makes native function succeed again on this thread.
///
pub fn recover(name: &'static str) {
    let _ = FAILING.with(|failing| failing.borrow_mut().remove(name));
}
/// Overwrites native flags of fake windows.
///
pub fn set_window_flags(flags: u64) {
    WINDOW_FLAGS.with(|window_flags| window_flags.set(flags));
}
/// Returns native flags of fake windows.
///
pub fn window_flags() -> u64 {
    WINDOW_FLAGS.with(Cell::get)
}
/// Returns last progress state and value that were set natively.
///
pub fn progress() -> (c_int, f32) {
    (PROGRESS_STATE.with(Cell::get), PROGRESS_VALUE.with(Cell::get))
}
/// Sets paths that fake file dialog returns (empty selection means cancellation).
///
pub fn set_dialog_selection(paths: &[&str]) {
    DIALOG_SELECTION.with(|selection| {
        *selection.borrow_mut() = paths
            .iter()
            .map(|path| CString::new(*path).expect("Test paths have no nul bytes"))
            .collect();
    });
}
/// Returns tooltip that was last given to fake tray.
///
pub fn tray_tooltip() -> Option<String> {
    TRAY_TOOLTIP.with(|tooltip| tooltip.borrow().clone())
}
/// Returns whether fake renderer draws into texture.
///
pub fn has_render_target() -> bool {
    RENDER_TARGET.with(|target| !target.get().is_null())
}
/// Returns amount of events in fake queue.
///
pub fn queued_events() -> usize {
    EVENTS.with(|events| events.borrow().len())
}

fn record(name: &'static str) {
    CALLS.with(|calls| *calls.borrow_mut().entry(name).or_insert(0) += 1);
}
fn succeed(name: &'static str) -> bool {
    record(name);
    !FAILING.with(|failing| failing.borrow().contains(name))
}
unsafe fn key(name: *const c_char) -> String {
    CStr::from_ptr(name).to_string_lossy().into_owned()
}
fn property(props: SDL_PropertiesID, name: &str) -> Option<Value> {
    PROPERTIES.with(|store| store.borrow().get(&props)?.get(name).cloned())
}
fn set_property(props: SDL_PropertiesID, name: *const c_char, value: Value) -> bool {
    // SAFETY: callers pass nul-terminated names.
    let name = unsafe { key(name) };
    PROPERTIES.with(|store| match store.borrow_mut().get_mut(&props) {
        Some(group) => {
            let _ = group.insert(name, value);
            true
        }
        None => false,
    })
}
fn fake_surface(w: c_int, h: c_int, format: u32) -> *mut SDL_Surface {
    // SAFETY: surface header is plain data, zero is valid for every field.
    let mut surface: SDL_Surface = unsafe { zeroed() };
    surface.format = SDL_PixelFormat(format as _);
    surface.w = w;
    surface.h = h;
    surface.pitch = w * 4;
    surface.refcount = 1;
    Box::into_raw(Box::new(surface))
}
unsafe fn destroy_menu(menu: *mut FakeMenu) {
    if menu.is_null() {
        return;
    }
    let menu = Box::from_raw(menu);
    for entry in menu.entries {
        let entry = Box::from_raw(entry);
        destroy_menu(entry.submenu);
    }
}
unsafe fn set_tooltip(tooltip: *const c_char) {
    let tooltip = (!tooltip.is_null()).then(|| key(tooltip));
    TRAY_TOOLTIP.with(|stored| *stored.borrow_mut() = tooltip);
}
fn in_range(event: &SDL_Event, min_type: u32, max_type: u32) -> bool {
    // SAFETY: every fake event was copied from initialized `SDL_Event`.
    let event_type = unsafe { event.r#type };
    (min_type..=max_type).contains(&event_type)
}

macro_rules! succeeding {
    ($($name:ident($($type:ty),*);)+) => {$(
        pub unsafe extern "C" fn $name($(_: $type),*) -> bool {
            succeed(stringify!($name))
        }
    )+};
}
macro_rules! counting {
    ($($name:ident($($type:ty),*);)+) => {$(
        pub unsafe extern "C" fn $name($(_: $type),*) {
            record(stringify!($name))
        }
    )+};
}

/// Native stubs.
///
mod stubs {
    use super::*;

    pub unsafe extern "C" fn SDL_GetError() -> *const c_char {
        b"fake native failure\0".as_ptr().cast()
    }
    counting!(
        SDL_free(*mut c_void);
        SDL_Quit();
        SDL_PumpEvents();
        SDL_DestroyCursor(*mut SDL_Cursor);
        SDL_DestroyRenderer(*mut SDL_Renderer);
        SDL_DestroyWindow(*mut SDL_Window);
        TTF_Quit();
    );

    pub unsafe extern "C" fn SDL_InitSubSystem(_: u32) -> bool {
        succeed("SDL_InitSubSystem")
    }
    pub unsafe extern "C" fn SDL_QuitSubSystem(_: u32) {
        record("SDL_QuitSubSystem")
    }
    pub unsafe extern "C" fn SDL_WasInit(_: u32) -> u32 {
        0
    }
    succeeding!(
        SDL_SetAppMetadata(*const c_char, *const c_char, *const c_char);
        SDL_SetAppMetadataProperty(*const c_char, *const c_char);
    );

    pub unsafe extern "C" fn SDL_CreateProperties() -> SDL_PropertiesID {
        if !succeed("SDL_CreateProperties") {
            return 0;
        }
        let id = NEXT_PROPERTIES.with(|next| next.replace(next.get() + 1));
        PROPERTIES.with(|store| {
            let _ = store.borrow_mut().insert(id, HashMap::new());
        });
        id
    }
    pub unsafe extern "C" fn SDL_DestroyProperties(props: SDL_PropertiesID) {
        record("SDL_DestroyProperties");
        PROPERTIES.with(|store| {
            let _ = store.borrow_mut().remove(&props);
        });
    }
    pub unsafe extern "C" fn SDL_HasProperty(props: SDL_PropertiesID, name: *const c_char) -> bool {
        property(props, &key(name)).is_some()
    }
    pub unsafe extern "C" fn SDL_ClearProperty(props: SDL_PropertiesID, name: *const c_char) -> bool {
        let name = key(name);
        PROPERTIES.with(|store| {
            if let Some(group) = store.borrow_mut().get_mut(&props) {
                let _ = group.remove(&name);
            }
        });
        true
    }
    pub unsafe extern "C" fn SDL_SetBooleanProperty(props: SDL_PropertiesID, name: *const c_char, value: bool) -> bool {
        set_property(props, name, Value::Bool(value))
    }
    pub unsafe extern "C" fn SDL_SetNumberProperty(props: SDL_PropertiesID, name: *const c_char, value: i64) -> bool {
        set_property(props, name, Value::Number(value))
    }
    pub unsafe extern "C" fn SDL_SetFloatProperty(props: SDL_PropertiesID, name: *const c_char, value: f32) -> bool {
        set_property(props, name, Value::Float(value))
    }
    pub unsafe extern "C" fn SDL_SetStringProperty(
        props: SDL_PropertiesID,
        name: *const c_char,
        value: *const c_char,
    ) -> bool {
        set_property(props, name, Value::String(CStr::from_ptr(value).to_owned()))
    }
    pub unsafe extern "C" fn SDL_SetPointerProperty(props: SDL_PropertiesID, name: *const c_char, value: *mut c_void) -> bool {
        set_property(props, name, Value::Pointer(value))
    }
    pub unsafe extern "C" fn SDL_GetBooleanProperty(props: SDL_PropertiesID, name: *const c_char, default: bool) -> bool {
        match property(props, &key(name)) {
            Some(Value::Bool(value)) => value,
            _ => default,
        }
    }
    pub unsafe extern "C" fn SDL_GetNumberProperty(props: SDL_PropertiesID, name: *const c_char, default: i64) -> i64 {
        match property(props, &key(name)) {
            Some(Value::Number(value)) => value,
            _ => default,
        }
    }
    pub unsafe extern "C" fn SDL_GetFloatProperty(props: SDL_PropertiesID, name: *const c_char, default: f32) -> f32 {
        match property(props, &key(name)) {
            Some(Value::Float(value)) => value,
            _ => default,
        }
    }
    pub unsafe extern "C" fn SDL_GetStringProperty(
        props: SDL_PropertiesID,
        name: *const c_char,
        default: *const c_char,
    ) -> *const c_char {
        let name = key(name);
        PROPERTIES.with(|store| {
            match store.borrow().get(&props).and_then(|group| group.get(&name)) {
                // Heap buffer of `CString` does not move while the entry is kept.
                Some(Value::String(value)) => value.as_ptr(),
                _ => default,
            }
        })
    }
    pub unsafe extern "C" fn SDL_GetPointerProperty(props: SDL_PropertiesID, name: *const c_char, default: *mut c_void) -> *mut c_void {
        match property(props, &key(name)) {
            Some(Value::Pointer(value)) => value,
            _ => default,
        }
    }

    pub unsafe extern "C" fn SDL_CreateWindowWithProperties(props: SDL_PropertiesID) -> *mut SDL_Window {
        if !succeed("SDL_CreateWindowWithProperties") {
            return null_mut();
        }
        let flag = |name: &str, bit: u64| match property(props, name) {
            Some(Value::Bool(true)) => bit,
            _ => 0,
        };
        let mut flags = flag(properties::WINDOW_CREATE_FULLSCREEN, 0x1)
            | flag(properties::WINDOW_CREATE_HIDDEN, 0x8)
            | flag(properties::WINDOW_CREATE_BORDERLESS, 0x10)
            | flag(properties::WINDOW_CREATE_RESIZABLE, 0x20)
            | flag(properties::WINDOW_CREATE_MINIMIZED, 0x40)
            | flag(properties::WINDOW_CREATE_MAXIMIZED, 0x80)
            | flag(properties::WINDOW_CREATE_ALWAYS_ON_TOP, 0x1_0000)
            | flag(properties::WINDOW_CREATE_HIGH_PIXEL_DENSITY, 0x2000)
            | flag(properties::WINDOW_CREATE_TRANSPARENT, 0x4000_0000);
        if let Some(Value::Bool(false)) = property(props, properties::WINDOW_CREATE_FOCUSABLE) {
            flags |= 0x8000_0000;
        }
        WINDOW_FLAGS.with(|window_flags| window_flags.set(flags));
        if let Some(Value::String(title)) = property(props, properties::WINDOW_CREATE_TITLE) {
            WINDOW_TITLE.with(|window_title| *window_title.borrow_mut() = title);
        }
        let number = |name: &str| match property(props, name) {
            Some(Value::Number(value)) => value as c_int,
            _ => 0,
        };
        WINDOW_SIZE.with(|size| {
            size.set((
                number(properties::WINDOW_CREATE_WIDTH),
                number(properties::WINDOW_CREATE_HEIGHT),
            ))
        });
        NonNull::dangling().as_ptr()
    }
    pub unsafe extern "C" fn SDL_GetWindowID(_: *mut SDL_Window) -> SDL_WindowID {
        FAKE_WINDOW_ID
    }
    pub unsafe extern "C" fn SDL_GetWindowFlags(_: *mut SDL_Window) -> u64 {
        WINDOW_FLAGS.with(Cell::get)
    }
    pub unsafe extern "C" fn SDL_SetWindowTitle(_: *mut SDL_Window, title: *const c_char) -> bool {
        if !succeed("SDL_SetWindowTitle") {
            return false;
        }
        WINDOW_TITLE.with(|window_title| *window_title.borrow_mut() = CStr::from_ptr(title).to_owned());
        true
    }
    pub unsafe extern "C" fn SDL_GetWindowTitle(_: *mut SDL_Window) -> *const c_char {
        WINDOW_TITLE.with(|title| title.borrow().as_ptr())
    }

    macro_rules! pair_accessors {
        ($($set:ident, $get:ident, $storage:ident;)+) => {$(
            pub unsafe extern "C" fn $set(_: *mut SDL_Window, x: c_int, y: c_int) -> bool {
                if !succeed(stringify!($set)) {
                    return false;
                }
                $storage.with(|storage| storage.set((x, y)));
                true
            }
            pub unsafe extern "C" fn $get(_: *mut SDL_Window, x: *mut c_int, y: *mut c_int) -> bool {
                let (first, second) = $storage.with(Cell::get);
                *x = first;
                *y = second;
                true
            }
        )+};
    }
    pair_accessors!(
        SDL_SetWindowPosition, SDL_GetWindowPosition, WINDOW_POSITION;
        SDL_SetWindowSize, SDL_GetWindowSize, WINDOW_SIZE;
        SDL_SetWindowMinimumSize, SDL_GetWindowMinimumSize, WINDOW_MINIMUM_SIZE;
        SDL_SetWindowMaximumSize, SDL_GetWindowMaximumSize, WINDOW_MAXIMUM_SIZE;
    );
    succeeding!(
        SDL_MaximizeWindow(*mut SDL_Window);
        SDL_MinimizeWindow(*mut SDL_Window);
        SDL_RestoreWindow(*mut SDL_Window);
        SDL_ShowWindow(*mut SDL_Window);
        SDL_HideWindow(*mut SDL_Window);
        SDL_RaiseWindow(*mut SDL_Window);
        SDL_SetWindowFullscreen(*mut SDL_Window, bool);
        SDL_SetWindowBordered(*mut SDL_Window, bool);
        SDL_SetWindowResizable(*mut SDL_Window, bool);
        SDL_SetWindowAlwaysOnTop(*mut SDL_Window, bool);
        SDL_SetWindowFocusable(*mut SDL_Window, bool);
        SDL_SetWindowMouseGrab(*mut SDL_Window, bool);
        SDL_SetWindowKeyboardGrab(*mut SDL_Window, bool);
        SDL_FlashWindow(*mut SDL_Window, c_int);
        SDL_SyncWindow(*mut SDL_Window);
        SDL_SetWindowIcon(*mut SDL_Window, *mut SDL_Surface);
        SDL_ShowSimpleMessageBox(u32, *const c_char, *const c_char, *mut SDL_Window);
    );
    pub unsafe extern "C" fn SDL_SetWindowOpacity(_: *mut SDL_Window, opacity: f32) -> bool {
        if !succeed("SDL_SetWindowOpacity") {
            return false;
        }
        WINDOW_OPACITY.with(|window_opacity| window_opacity.set(opacity));
        true
    }
    pub unsafe extern "C" fn SDL_GetWindowOpacity(_: *mut SDL_Window) -> f32 {
        WINDOW_OPACITY.with(Cell::get)
    }
    pub unsafe extern "C" fn SDL_GetWindowPixelDensity(_: *mut SDL_Window) -> f32 {
        2.0
    }
    pub unsafe extern "C" fn SDL_GetDisplayForWindow(_: *mut SDL_Window) -> SDL_DisplayID {
        1
    }
    pub unsafe extern "C" fn SDL_SetWindowProgressState(_: *mut SDL_Window, state: c_int) -> bool {
        if !succeed("SDL_SetWindowProgressState") {
            return false;
        }
        PROGRESS_STATE.with(|progress_state| progress_state.set(state));
        true
    }
    pub unsafe extern "C" fn SDL_SetWindowProgressValue(_: *mut SDL_Window, value: f32) -> bool {
        if !succeed("SDL_SetWindowProgressValue") {
            return false;
        }
        PROGRESS_VALUE.with(|progress_value| progress_value.set(value));
        true
    }

    pub unsafe extern "C" fn SDL_GetDisplays(count: *mut c_int) -> *mut SDL_DisplayID {
        if !count.is_null() {
            *count = 2;
        }
        // Fake `SDL_free` does not free, the array is leaked.
        Box::into_raw(Box::new([1_u32, 2, 0])).cast()
    }
    pub unsafe extern "C" fn SDL_GetPrimaryDisplay() -> SDL_DisplayID {
        1
    }
    pub unsafe extern "C" fn SDL_GetDisplayName(display: SDL_DisplayID) -> *const c_char {
        match display {
            1 => b"Primary\0".as_ptr().cast(),
            2 => b"Secondary\0".as_ptr().cast(),
            _ => null(),
        }
    }
    pub unsafe extern "C" fn SDL_GetDisplayBounds(display: SDL_DisplayID, rect: *mut SDL_Rect) -> bool {
        *rect = SDL_Rect {
            x: (display as c_int - 1) * 1920,
            y: 0,
            w: 1920,
            h: 1080,
        };
        true
    }
    pub unsafe extern "C" fn SDL_GetDisplayUsableBounds(display: SDL_DisplayID, rect: *mut SDL_Rect) -> bool {
        *rect = SDL_Rect {
            x: (display as c_int - 1) * 1920,
            y: 0,
            w: 1920,
            h: 1040,
        };
        true
    }
    pub unsafe extern "C" fn SDL_GetDisplayContentScale(_: SDL_DisplayID) -> f32 {
        1.25
    }
    fn display_mode(display: SDL_DisplayID, w: c_int, h: c_int) -> *mut SDL_DisplayMode {
        // SAFETY: display mode is plain data, zero is valid for every field.
        let mut mode: SDL_DisplayMode = unsafe { zeroed() };
        mode.displayID = display;
        mode.format = SDL_PixelFormat(0x1616_1804);
        mode.w = w;
        mode.h = h;
        mode.pixel_density = 1.0;
        mode.refresh_rate = 60.0;
        mode.refresh_rate_numerator = 60;
        mode.refresh_rate_denominator = 1;
        Box::into_raw(Box::new(mode))
    }
    pub unsafe extern "C" fn SDL_GetCurrentDisplayMode(display: SDL_DisplayID) -> *const SDL_DisplayMode {
        display_mode(display, 1920, 1080)
    }
    pub unsafe extern "C" fn SDL_GetDesktopDisplayMode(display: SDL_DisplayID) -> *const SDL_DisplayMode {
        display_mode(display, 1920, 1080)
    }
    pub unsafe extern "C" fn SDL_GetFullscreenDisplayModes(
        display: SDL_DisplayID,
        count: *mut c_int,
    ) -> *mut *mut SDL_DisplayMode {
        if !count.is_null() {
            *count = 2;
        }
        Box::into_raw(Box::new([
            display_mode(display, 1920, 1080),
            display_mode(display, 1280, 720),
            null_mut(),
        ]))
        .cast()
    }

    pub unsafe extern "C" fn SDL_PollEvent(event: *mut SDL_Event) -> bool {
        EVENTS.with(|events| {
            let mut events = events.borrow_mut();
            if event.is_null() {
                return !events.is_empty();
            }
            match events.pop_front() {
                Some(front) => {
                    *event = front;
                    true
                }
                None => false,
            }
        })
    }
    pub unsafe extern "C" fn SDL_WaitEvent(event: *mut SDL_Event) -> bool {
        record("SDL_WaitEvent");
        SDL_PollEvent(event)
    }
    pub unsafe extern "C" fn SDL_WaitEventTimeout(event: *mut SDL_Event, _: i32) -> bool {
        record("SDL_WaitEventTimeout");
        SDL_PollEvent(event)
    }
    pub unsafe extern "C" fn SDL_PushEvent(event: *mut SDL_Event) -> bool {
        if !succeed("SDL_PushEvent") {
            return false;
        }
        EVENTS.with(|events| events.borrow_mut().push_back(*event));
        true
    }
    pub unsafe extern "C" fn SDL_PeepEvents(
        buffer: *mut SDL_Event,
        numevents: c_int,
        action: c_int,
        min_type: u32,
        max_type: u32,
    ) -> c_int {
        if !succeed("SDL_PeepEvents") {
            return -1;
        }
        EVENTS.with(|events| {
            let mut events = events.borrow_mut();
            if action == SDL_ADDEVENT.0 {
                for index in 0..numevents as usize {
                    events.push_back(*buffer.add(index));
                }
                return numevents;
            }
            let matching: Vec<usize> = (0..events.len())
                .filter(|index| in_range(&events[*index], min_type, max_type))
                .take(if buffer.is_null() { usize::MAX } else { numevents as usize })
                .collect();
            if !buffer.is_null() {
                for (slot, index) in matching.iter().enumerate() {
                    *buffer.add(slot) = events[*index];
                }
                if action == SDL_GETEVENT.0 {
                    for index in matching.iter().rev() {
                        let _ = events.remove(*index);
                    }
                }
            }
            matching.len() as c_int
        })
    }
    pub unsafe extern "C" fn SDL_HasEvents(min_type: u32, max_type: u32) -> bool {
        EVENTS.with(|events| events.borrow().iter().any(|event| in_range(event, min_type, max_type)))
    }
    pub unsafe extern "C" fn SDL_FlushEvents(min_type: u32, max_type: u32) {
        record("SDL_FlushEvents");
        EVENTS.with(|events| events.borrow_mut().retain(|event| !in_range(event, min_type, max_type)));
    }
    pub unsafe extern "C" fn SDL_RegisterEvents(numevents: c_int) -> u32 {
        if !succeed("SDL_RegisterEvents") {
            return 0;
        }
        NEXT_USER_EVENT.with(|next| next.replace(next.get() + numevents as u32))
    }

    pub unsafe extern "C" fn SDL_CreateRenderer(_: *mut SDL_Window, _: *const c_char) -> *mut SDL_Renderer {
        if !succeed("SDL_CreateRenderer") {
            return null_mut();
        }
        // Every renderer gets its own address; fake renderers are never freed.
        Box::into_raw(Box::new(0u64)).cast()
    }
    succeeding!(
        SDL_SetRenderVSync(*mut SDL_Renderer, c_int);
        SDL_RenderClear(*mut SDL_Renderer);
        SDL_RenderPresent(*mut SDL_Renderer);
        SDL_RenderPoint(*mut SDL_Renderer, f32, f32);
        SDL_RenderLine(*mut SDL_Renderer, f32, f32, f32, f32);
        SDL_RenderRect(*mut SDL_Renderer, *const SDL_FRect);
        SDL_RenderFillRect(*mut SDL_Renderer, *const SDL_FRect);
        SDL_RenderTextureRotated(
            *mut SDL_Renderer,
            *mut SDL_Texture,
            *const SDL_FRect,
            *const SDL_FRect,
            f64,
            *const SDL_FPoint,
            c_int
        );
        SDL_SetRenderLogicalPresentation(*mut SDL_Renderer, c_int, c_int, c_int);
        SDL_SetRenderScale(*mut SDL_Renderer, f32, f32);
    );
    pub unsafe extern "C" fn SDL_SetRenderDrawColor(_: *mut SDL_Renderer, r: u8, g: u8, b: u8, a: u8) -> bool {
        DRAW_COLOR.with(|color| color.set((r, g, b, a)));
        succeed("SDL_SetRenderDrawColor")
    }
    pub unsafe extern "C" fn SDL_GetRenderDrawColor(
        _: *mut SDL_Renderer,
        r: *mut u8,
        g: *mut u8,
        b: *mut u8,
        a: *mut u8,
    ) -> bool {
        let color = DRAW_COLOR.with(Cell::get);
        *r = color.0;
        *g = color.1;
        *b = color.2;
        *a = color.3;
        true
    }
    pub unsafe extern "C" fn SDL_SetRenderDrawBlendMode(_: *mut SDL_Renderer, blend_mode: u32) -> bool {
        DRAW_BLEND.with(|blend| blend.set(blend_mode));
        succeed("SDL_SetRenderDrawBlendMode")
    }
    pub unsafe extern "C" fn SDL_GetRenderDrawBlendMode(_: *mut SDL_Renderer, blend_mode: *mut u32) -> bool {
        *blend_mode = DRAW_BLEND.with(Cell::get);
        true
    }
    pub unsafe extern "C" fn SDL_SetRenderTarget(_: *mut SDL_Renderer, texture: *mut SDL_Texture) -> bool {
        if !succeed("SDL_SetRenderTarget") {
            return false;
        }
        RENDER_TARGET.with(|target| target.set(texture));
        true
    }
    pub unsafe extern "C" fn SDL_GetRenderOutputSize(_: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int) -> bool {
        *w = FAKE_OUTPUT_SIZE.0;
        *h = FAKE_OUTPUT_SIZE.1;
        true
    }

    fn fake_texture(w: c_int, h: c_int) -> *mut SDL_Texture {
        Box::into_raw(Box::new(FakeTexture {
            w,
            h,
            color: (255, 255, 255),
            alpha: 255,
            blend: 1,
        }))
        .cast()
    }
    unsafe fn texture<'a>(texture: *mut SDL_Texture) -> &'a mut FakeTexture {
        &mut *texture.cast::<FakeTexture>()
    }
    pub unsafe extern "C" fn SDL_CreateTexture(_: *mut SDL_Renderer, _: u32, _: c_int, w: c_int, h: c_int) -> *mut SDL_Texture {
        if !succeed("SDL_CreateTexture") {
            return null_mut();
        }
        fake_texture(w, h)
    }
    pub unsafe extern "C" fn SDL_CreateTextureFromSurface(_: *mut SDL_Renderer, surface: *mut SDL_Surface) -> *mut SDL_Texture {
        if !succeed("SDL_CreateTextureFromSurface") {
            return null_mut();
        }
        fake_texture((*surface).w, (*surface).h)
    }
    pub unsafe extern "C" fn SDL_DestroyTexture(raw: *mut SDL_Texture) {
        record("SDL_DestroyTexture");
        drop(Box::from_raw(raw.cast::<FakeTexture>()));
    }
    pub unsafe extern "C" fn SDL_GetTextureSize(raw: *mut SDL_Texture, w: *mut f32, h: *mut f32) -> bool {
        let texture = texture(raw);
        *w = texture.w as f32;
        *h = texture.h as f32;
        true
    }
    pub unsafe extern "C" fn SDL_SetTextureColorMod(raw: *mut SDL_Texture, r: u8, g: u8, b: u8) -> bool {
        texture(raw).color = (r, g, b);
        succeed("SDL_SetTextureColorMod")
    }
    pub unsafe extern "C" fn SDL_GetTextureColorMod(raw: *mut SDL_Texture, r: *mut u8, g: *mut u8, b: *mut u8) -> bool {
        let (red, green, blue) = texture(raw).color;
        *r = red;
        *g = green;
        *b = blue;
        true
    }
    pub unsafe extern "C" fn SDL_SetTextureAlphaMod(raw: *mut SDL_Texture, alpha: u8) -> bool {
        texture(raw).alpha = alpha;
        succeed("SDL_SetTextureAlphaMod")
    }
    pub unsafe extern "C" fn SDL_GetTextureAlphaMod(raw: *mut SDL_Texture, alpha: *mut u8) -> bool {
        *alpha = texture(raw).alpha;
        true
    }
    pub unsafe extern "C" fn SDL_SetTextureBlendMode(raw: *mut SDL_Texture, blend_mode: u32) -> bool {
        texture(raw).blend = blend_mode;
        succeed("SDL_SetTextureBlendMode")
    }
    pub unsafe extern "C" fn SDL_GetTextureBlendMode(raw: *mut SDL_Texture, blend_mode: *mut u32) -> bool {
        *blend_mode = texture(raw).blend;
        true
    }

    pub unsafe extern "C" fn SDL_CreateSurface(width: c_int, height: c_int, format: u32) -> *mut SDL_Surface {
        if !succeed("SDL_CreateSurface") {
            return null_mut();
        }
        fake_surface(width, height, format)
    }
    pub unsafe extern "C" fn SDL_DestroySurface(surface: *mut SDL_Surface) {
        record("SDL_DestroySurface");
        drop(Box::from_raw(surface));
    }
    pub unsafe extern "C" fn SDL_LoadBMP(_: *const c_char) -> *mut SDL_Surface {
        if !succeed("SDL_LoadBMP") {
            return null_mut();
        }
        fake_surface(32, 32, 0x1646_2004)
    }
    succeeding!(
        SDL_SaveBMP(*mut SDL_Surface, *const c_char);
        SDL_FillSurfaceRect(*mut SDL_Surface, *const SDL_Rect, u32);
        SDL_SetSurfacePalette(*mut SDL_Surface, *mut SDL_Palette);
        SDL_SetCursor(*mut SDL_Cursor);
    );
    pub unsafe extern "C" fn SDL_MapSurfaceRGBA(_: *mut SDL_Surface, r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_be_bytes([r, g, b, a])
    }
    pub unsafe extern "C" fn SDL_GetSurfacePalette(_: *mut SDL_Surface) -> *mut SDL_Palette {
        null_mut()
    }

    pub unsafe extern "C" fn SDL_CreatePalette(ncolors: c_int) -> *mut SDL_Palette {
        if !succeed("SDL_CreatePalette") {
            return null_mut();
        }
        let colors = vec![SDL_Color { r: 255, g: 255, b: 255, a: 255 }; ncolors as usize].into_boxed_slice();
        let mut palette: SDL_Palette = zeroed();
        palette.ncolors = ncolors;
        palette.colors = Box::into_raw(colors).cast();
        palette.refcount = 1;
        Box::into_raw(Box::new(palette))
    }
    pub unsafe extern "C" fn SDL_DestroyPalette(palette: *mut SDL_Palette) {
        record("SDL_DestroyPalette");
        let palette = Box::from_raw(palette);
        drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
            palette.colors,
            palette.ncolors as usize,
        )));
    }
    pub unsafe extern "C" fn SDL_SetPaletteColors(
        palette: *mut SDL_Palette,
        colors: *const SDL_Color,
        firstcolor: c_int,
        ncolors: c_int,
    ) -> bool {
        if !succeed("SDL_SetPaletteColors") || firstcolor + ncolors > (*palette).ncolors {
            return false;
        }
        for index in 0..ncolors as usize {
            *(*palette).colors.add(firstcolor as usize + index) = *colors.add(index);
        }
        true
    }

    pub unsafe extern "C" fn SDL_CreateSystemCursor(_: c_int) -> *mut SDL_Cursor {
        if !succeed("SDL_CreateSystemCursor") {
            return null_mut();
        }
        NonNull::dangling().as_ptr()
    }
    pub unsafe extern "C" fn SDL_CreateColorCursor(_: *mut SDL_Surface, _: c_int, _: c_int) -> *mut SDL_Cursor {
        if !succeed("SDL_CreateColorCursor") {
            return null_mut();
        }
        NonNull::dangling().as_ptr()
    }
    pub unsafe extern "C" fn SDL_GetCursor() -> *mut SDL_Cursor {
        NonNull::dangling().as_ptr()
    }
    pub unsafe extern "C" fn SDL_GetDefaultCursor() -> *mut SDL_Cursor {
        NonNull::dangling().as_ptr()
    }
    pub unsafe extern "C" fn SDL_ShowCursor() -> bool {
        CURSOR_VISIBLE.with(|visible| visible.set(true));
        true
    }
    pub unsafe extern "C" fn SDL_HideCursor() -> bool {
        CURSOR_VISIBLE.with(|visible| visible.set(false));
        true
    }
    pub unsafe extern "C" fn SDL_CursorVisible() -> bool {
        CURSOR_VISIBLE.with(Cell::get)
    }

    pub unsafe extern "C" fn SDL_ShowFileDialogWithProperties(
        _: c_int,
        callback: SDL_DialogFileCallback,
        userdata: *mut c_void,
        _: SDL_PropertiesID,
    ) {
        let Some(callback) = callback else {
            return;
        };
        if !succeed("SDL_ShowFileDialogWithProperties") {
            callback(userdata, null(), -1);
            return;
        }
        DIALOG_SELECTION.with(|selection| {
            let selection = selection.borrow();
            let mut list: Vec<*const c_char> = selection.iter().map(|path| path.as_ptr()).collect();
            list.push(null());
            callback(userdata, list.as_ptr(), if selection.is_empty() { -1 } else { 0 });
        });
    }

    pub unsafe extern "C" fn SDL_CreateTray(_: *mut SDL_Surface, tooltip: *const c_char) -> *mut SDL_Tray {
        if !succeed("SDL_CreateTray") {
            return null_mut();
        }
        set_tooltip(tooltip);
        Box::into_raw(Box::new(FakeTray { menu: null_mut() })).cast()
    }
    pub unsafe extern "C" fn SDL_DestroyTray(tray: *mut SDL_Tray) {
        record("SDL_DestroyTray");
        let tray = Box::from_raw(tray.cast::<FakeTray>());
        destroy_menu(tray.menu);
    }
    counting!(
        SDL_SetTrayIcon(*mut SDL_Tray, *mut SDL_Surface);
    );
    pub unsafe extern "C" fn SDL_SetTrayTooltip(_: *mut SDL_Tray, tooltip: *const c_char) {
        set_tooltip(tooltip);
    }
    pub unsafe extern "C" fn SDL_CreateTrayMenu(tray: *mut SDL_Tray) -> *mut SDL_TrayMenu {
        if !succeed("SDL_CreateTrayMenu") {
            return null_mut();
        }
        let tray = tray.cast::<FakeTray>();
        destroy_menu((*tray).menu);
        (*tray).menu = Box::into_raw(Box::default());
        (*tray).menu.cast()
    }
    pub unsafe extern "C" fn SDL_CreateTraySubmenu(entry: *mut SDL_TrayEntry) -> *mut SDL_TrayMenu {
        let entry = entry.cast::<FakeEntry>();
        if !succeed("SDL_CreateTraySubmenu") || (*entry).flags & SDL_TRAYENTRY_SUBMENU == 0 {
            return null_mut();
        }
        if (*entry).submenu.is_null() {
            (*entry).submenu = Box::into_raw(Box::default());
        }
        (*entry).submenu.cast()
    }
    pub unsafe extern "C" fn SDL_GetTraySubmenu(entry: *mut SDL_TrayEntry) -> *mut SDL_TrayMenu {
        (*entry.cast::<FakeEntry>()).submenu.cast()
    }
    pub unsafe extern "C" fn SDL_GetTrayEntries(menu: *mut SDL_TrayMenu, count: *mut c_int) -> *mut *const SDL_TrayEntry {
        let menu = &mut *menu.cast::<FakeMenu>();
        menu.listing = menu.entries.iter().map(|entry| entry.cast_const().cast()).collect();
        menu.listing.push(null());
        if !count.is_null() {
            *count = menu.entries.len() as c_int;
        }
        menu.listing.as_mut_ptr()
    }
    pub unsafe extern "C" fn SDL_InsertTrayEntryAt(
        menu: *mut SDL_TrayMenu,
        pos: c_int,
        label: *const c_char,
        flags: u32,
    ) -> *mut SDL_TrayEntry {
        let menu = menu.cast::<FakeMenu>();
        let length = (*menu).entries.len() as c_int;
        if !succeed("SDL_InsertTrayEntryAt") || pos < -1 || pos > length {
            return null_mut();
        }
        let entry = Box::into_raw(Box::new(FakeEntry {
            parent: menu,
            label: (!label.is_null()).then(|| CStr::from_ptr(label).to_owned()),
            flags,
            checked: flags & SDL_TRAYENTRY_CHECKED != 0,
            enabled: flags & SDL_TRAYENTRY_DISABLED == 0,
            callback: None,
            userdata: null_mut(),
            submenu: null_mut(),
        }));
        let index = if pos == -1 { length } else { pos };
        (*menu).entries.insert(index as usize, entry);
        entry.cast()
    }
    pub unsafe extern "C" fn SDL_RemoveTrayEntry(entry: *mut SDL_TrayEntry) {
        record("SDL_RemoveTrayEntry");
        let entry = entry.cast::<FakeEntry>();
        (*(*entry).parent).entries.retain(|other| *other != entry);
        let entry = Box::from_raw(entry);
        destroy_menu(entry.submenu);
    }
    pub unsafe extern "C" fn SDL_SetTrayEntryLabel(entry: *mut SDL_TrayEntry, label: *const c_char) {
        (*entry.cast::<FakeEntry>()).label = (!label.is_null()).then(|| CStr::from_ptr(label).to_owned());
    }
    pub unsafe extern "C" fn SDL_GetTrayEntryLabel(entry: *mut SDL_TrayEntry) -> *const c_char {
        (*entry.cast::<FakeEntry>()).label.as_ref().map_or(null(), |label| label.as_ptr())
    }
    pub unsafe extern "C" fn SDL_SetTrayEntryChecked(entry: *mut SDL_TrayEntry, checked: bool) {
        let entry = entry.cast::<FakeEntry>();
        if (*entry).flags & SDL_TRAYENTRY_CHECKBOX != 0 {
            (*entry).checked = checked;
        }
    }
    pub unsafe extern "C" fn SDL_GetTrayEntryChecked(entry: *mut SDL_TrayEntry) -> bool {
        (*entry.cast::<FakeEntry>()).checked
    }
    pub unsafe extern "C" fn SDL_SetTrayEntryEnabled(entry: *mut SDL_TrayEntry, enabled: bool) {
        (*entry.cast::<FakeEntry>()).enabled = enabled;
    }
    pub unsafe extern "C" fn SDL_GetTrayEntryEnabled(entry: *mut SDL_TrayEntry) -> bool {
        (*entry.cast::<FakeEntry>()).enabled
    }
    pub unsafe extern "C" fn SDL_SetTrayEntryCallback(
        entry: *mut SDL_TrayEntry,
        callback: SDL_TrayCallback,
        userdata: *mut c_void,
    ) {
        record("SDL_SetTrayEntryCallback");
        let entry = entry.cast::<FakeEntry>();
        (*entry).callback = callback;
        (*entry).userdata = userdata;
    }
    pub unsafe extern "C" fn SDL_ClickTrayEntry(entry: *mut SDL_TrayEntry) {
        let fake = entry.cast::<FakeEntry>();
        if !(*fake).enabled {
            return;
        }
        if (*fake).flags & SDL_TRAYENTRY_CHECKBOX != 0 {
            (*fake).checked = !(*fake).checked;
        }
        if let Some(callback) = (*fake).callback {
            callback((*fake).userdata, entry);
        }
    }

    pub unsafe extern "C" fn TTF_Init() -> bool {
        succeed("TTF_Init")
    }
    pub unsafe extern "C" fn TTF_OpenFont(_: *const c_char, ptsize: f32) -> *mut TTF_Font {
        if !succeed("TTF_OpenFont") {
            return null_mut();
        }
        Box::into_raw(Box::new(FakeFont { size: ptsize, style: 0 })).cast()
    }
    pub unsafe extern "C" fn TTF_CloseFont(font: *mut TTF_Font) {
        record("TTF_CloseFont");
        drop(Box::from_raw(font.cast::<FakeFont>()));
    }
    pub unsafe extern "C" fn TTF_SetFontStyle(font: *mut TTF_Font, style: u32) {
        (*font.cast::<FakeFont>()).style = style;
    }
    pub unsafe extern "C" fn TTF_GetFontStyle(font: *const TTF_Font) -> u32 {
        (*font.cast::<FakeFont>()).style
    }
    pub unsafe extern "C" fn TTF_SetFontSize(font: *mut TTF_Font, ptsize: f32) -> bool {
        (*font.cast::<FakeFont>()).size = ptsize;
        true
    }
    pub unsafe extern "C" fn TTF_GetFontSize(font: *mut TTF_Font) -> f32 {
        (*font.cast::<FakeFont>()).size
    }
    pub unsafe extern "C" fn TTF_RenderText_Blended(
        font: *mut TTF_Font,
        _: *const c_char,
        length: usize,
        _: SDL_Color,
    ) -> *mut SDL_Surface {
        let size = (*font.cast::<FakeFont>()).size;
        fake_surface(length as c_int * 8, size as c_int, 0x1646_2004)
    }
    pub unsafe extern "C" fn TTF_GetStringSize(
        font: *mut TTF_Font,
        _: *const c_char,
        length: usize,
        w: *mut c_int,
        h: *mut c_int,
    ) -> bool {
        *w = length as c_int * 8;
        *h = (*font.cast::<FakeFont>()).size as c_int;
        true
    }
}

macro_rules! fake_api {
    ($($name:ident,)+) => {
        NativeApi {
            $($name: Some(stubs::$name),)+
            ..NativeApi::default()
        }
    };
}

/// Returns native function table that is backed by thread-local fake.
///
/// SDL3_image is absent from the fake.
///
pub fn fake_sdl() -> Arc<Sdl> {
    Arc::new(Sdl::from_api(fake_api!(
        SDL_GetError,
        SDL_free,
        SDL_InitSubSystem,
        SDL_QuitSubSystem,
        SDL_WasInit,
        SDL_Quit,
        SDL_SetAppMetadata,
        SDL_SetAppMetadataProperty,
        SDL_CreateProperties,
        SDL_DestroyProperties,
        SDL_HasProperty,
        SDL_ClearProperty,
        SDL_SetBooleanProperty,
        SDL_SetNumberProperty,
        SDL_SetFloatProperty,
        SDL_SetStringProperty,
        SDL_SetPointerProperty,
        SDL_GetBooleanProperty,
        SDL_GetNumberProperty,
        SDL_GetFloatProperty,
        SDL_GetStringProperty,
        SDL_GetPointerProperty,
        SDL_CreateWindowWithProperties,
        SDL_DestroyWindow,
        SDL_GetWindowID,
        SDL_GetWindowFlags,
        SDL_SetWindowTitle,
        SDL_GetWindowTitle,
        SDL_SetWindowPosition,
        SDL_GetWindowPosition,
        SDL_SetWindowSize,
        SDL_GetWindowSize,
        SDL_SetWindowMinimumSize,
        SDL_GetWindowMinimumSize,
        SDL_SetWindowMaximumSize,
        SDL_GetWindowMaximumSize,
        SDL_MaximizeWindow,
        SDL_MinimizeWindow,
        SDL_RestoreWindow,
        SDL_ShowWindow,
        SDL_HideWindow,
        SDL_RaiseWindow,
        SDL_SetWindowFullscreen,
        SDL_SetWindowBordered,
        SDL_SetWindowResizable,
        SDL_SetWindowAlwaysOnTop,
        SDL_SetWindowFocusable,
        SDL_SetWindowMouseGrab,
        SDL_SetWindowKeyboardGrab,
        SDL_SetWindowOpacity,
        SDL_GetWindowOpacity,
        SDL_FlashWindow,
        SDL_SyncWindow,
        SDL_SetWindowIcon,
        SDL_GetWindowPixelDensity,
        SDL_GetDisplayForWindow,
        SDL_SetWindowProgressState,
        SDL_SetWindowProgressValue,
        SDL_GetDisplays,
        SDL_GetPrimaryDisplay,
        SDL_GetDisplayName,
        SDL_GetDisplayBounds,
        SDL_GetDisplayUsableBounds,
        SDL_GetDisplayContentScale,
        SDL_GetCurrentDisplayMode,
        SDL_GetDesktopDisplayMode,
        SDL_GetFullscreenDisplayModes,
        SDL_PumpEvents,
        SDL_PollEvent,
        SDL_WaitEvent,
        SDL_WaitEventTimeout,
        SDL_PushEvent,
        SDL_PeepEvents,
        SDL_HasEvents,
        SDL_FlushEvents,
        SDL_RegisterEvents,
        SDL_CreateRenderer,
        SDL_DestroyRenderer,
        SDL_SetRenderVSync,
        SDL_SetRenderDrawColor,
        SDL_GetRenderDrawColor,
        SDL_SetRenderDrawBlendMode,
        SDL_GetRenderDrawBlendMode,
        SDL_RenderClear,
        SDL_RenderPresent,
        SDL_RenderPoint,
        SDL_RenderLine,
        SDL_RenderRect,
        SDL_RenderFillRect,
        SDL_RenderTextureRotated,
        SDL_SetRenderLogicalPresentation,
        SDL_SetRenderScale,
        SDL_SetRenderTarget,
        SDL_GetRenderOutputSize,
        SDL_CreateTexture,
        SDL_CreateTextureFromSurface,
        SDL_DestroyTexture,
        SDL_GetTextureSize,
        SDL_SetTextureColorMod,
        SDL_GetTextureColorMod,
        SDL_SetTextureAlphaMod,
        SDL_GetTextureAlphaMod,
        SDL_SetTextureBlendMode,
        SDL_GetTextureBlendMode,
        SDL_CreateSurface,
        SDL_DestroySurface,
        SDL_LoadBMP,
        SDL_SaveBMP,
        SDL_FillSurfaceRect,
        SDL_MapSurfaceRGBA,
        SDL_SetSurfacePalette,
        SDL_GetSurfacePalette,
        SDL_CreatePalette,
        SDL_DestroyPalette,
        SDL_SetPaletteColors,
        SDL_CreateSystemCursor,
        SDL_CreateColorCursor,
        SDL_DestroyCursor,
        SDL_SetCursor,
        SDL_GetCursor,
        SDL_GetDefaultCursor,
        SDL_ShowCursor,
        SDL_HideCursor,
        SDL_CursorVisible,
        SDL_ShowFileDialogWithProperties,
        SDL_ShowSimpleMessageBox,
        SDL_CreateTray,
        SDL_DestroyTray,
        SDL_SetTrayIcon,
        SDL_SetTrayTooltip,
        SDL_CreateTrayMenu,
        SDL_CreateTraySubmenu,
        SDL_GetTraySubmenu,
        SDL_GetTrayEntries,
        SDL_InsertTrayEntryAt,
        SDL_RemoveTrayEntry,
        SDL_SetTrayEntryLabel,
        SDL_GetTrayEntryLabel,
        SDL_SetTrayEntryChecked,
        SDL_GetTrayEntryChecked,
        SDL_SetTrayEntryEnabled,
        SDL_GetTrayEntryEnabled,
        SDL_SetTrayEntryCallback,
        SDL_ClickTrayEntry,
        TTF_Init,
        TTF_Quit,
        TTF_OpenFont,
        TTF_CloseFont,
        TTF_SetFontStyle,
        TTF_GetFontStyle,
        TTF_SetFontSize,
        TTF_GetFontSize,
        TTF_RenderText_Blended,
        TTF_GetStringSize,
    )))
}
