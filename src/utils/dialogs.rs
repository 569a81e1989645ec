//! `utils::dialogs` submodule implements native file dialogs and message boxes.
//!
//! File dialogs are asynchronous: [`FileDialog::show`] returns immediately and the outcome
//! is handed to the callback once user closes the dialog. Callback may be invoked on another
//! thread, which is why it should be [`Send`].
//!

use crate::{
    error::{Error, Result},
    nativecore::{
        ffi::{
            SDL_DialogFileFilter, SDL_FILEDIALOG_OPENFILE, SDL_FILEDIALOG_OPENFOLDER,
            SDL_FILEDIALOG_SAVEFILE, SDL_MESSAGEBOX_ERROR, SDL_MESSAGEBOX_INFORMATION,
            SDL_MESSAGEBOX_WARNING,
        },
        library::{native, native_ok, string_from_native, Sdl},
        properties::{self, Properties},
    },
    utils::windows::Window,
};
use std::{
    ffi::{c_char, c_int, c_void, CString},
    fmt,
    panic::{catch_unwind, AssertUnwindSafe},
    path::{Path, PathBuf},
    ptr::null_mut,
    sync::Arc,
};

/// [`FileDialogKind`] enum lists kinds of file dialogs.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FileDialogKind {
    /// Dialog for choosing existing file(s).
    ///
    OpenFile,
    /// Dialog for choosing where to save file.
    ///
    SaveFile,
    /// Dialog for choosing existing folder(s).
    ///
    OpenFolder,
}
impl FileDialogKind {
    /// Returns native dialog type.
    ///
    fn to_native(self) -> c_int {
        match self {
            FileDialogKind::OpenFile => SDL_FILEDIALOG_OPENFILE.0,
            FileDialogKind::SaveFile => SDL_FILEDIALOG_SAVEFILE.0,
            FileDialogKind::OpenFolder => SDL_FILEDIALOG_OPENFOLDER.0,
        }
    }
}
/// [`FileFilter`] struct describes one file type filter of a dialog.
///
/// Pattern is a list of extensions separated by `;` (`"png;jpg"`), `*` matches every file.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileFilter {
    /// Human-readable name of the filter.
    ///
    pub name: String,
    /// Extension pattern.
    ///
    pub pattern: String,
}

/// [`DialogOutcome`] enum lists possible results of file dialog.
///
#[derive(Debug)]
pub enum DialogOutcome {
    /// User has chosen paths.
    ///
    Selected {
        /// Chosen paths.
        ///
        paths: Vec<PathBuf>,
        /// Index of filter that was active, if platform reports it.
        ///
        filter: Option<usize>,
    },
    /// User has closed the dialog without choosing anything.
    ///
    Cancelled,
    /// Dialog could not be shown or has failed.
    ///
    Failed(Error),
}

/// Callback of file dialog.
///
type DialogCallback = Box<dyn FnOnce(DialogOutcome) + Send + 'static>;
/// Data that lives while dialog is open.
///
struct PendingDialog {
    /// Native library.
    ///
    sdl: Arc<Sdl>,
    /// User callback.
    ///
    callback: DialogCallback,
    /// Native filters (should stay valid until callback is invoked).
    ///
    _filters: Vec<SDL_DialogFileFilter>,
    /// Strings that native filters point to.
    ///
    _strings: Vec<CString>,
}

/// [`FileDialog`] struct is a builder of native file dialog.
///
/// # Example
/// ```rust,no_run
/// # use ggsdl::{Engine, utils::{DialogOutcome, FileDialog, FileDialogKind}};
/// let engine: Engine = Engine::load()?;
/// let window = engine.build_window("GGSDL", 800, 600, Default::default())?;
/// FileDialog::new(FileDialogKind::OpenFile)
///     .title("Open image")
///     .filter("Images", "png;bmp")
///     .allow_many(true)
///     .show(engine.sdl(), Some(&window), |outcome| {
///         if let DialogOutcome::Selected { paths, .. } = outcome {
///             println!("{paths:?}");
///         }
///     })?;
/// # Ok::<(), ggsdl::Error>(())
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDialog {
    /// Kind of the dialog.
    ///
    kind: FileDialogKind,
    /// Title of the dialog.
    ///
    title: Option<String>,
    /// Label of accepting button.
    ///
    accept_label: Option<String>,
    /// Label of cancelling button.
    ///
    cancel_label: Option<String>,
    /// Initial location.
    ///
    location: Option<PathBuf>,
    /// File filters.
    ///
    filters: Vec<FileFilter>,
    /// Whether many paths can be chosen.
    ///
    allow_many: bool,
}
impl FileDialog {
    /// Initializes builder of dialog with given kind.
    ///
    pub fn new(kind: FileDialogKind) -> FileDialog {
        FileDialog {
            kind,
            title: None,
            accept_label: None,
            cancel_label: None,
            location: None,
            filters: Vec::new(),
            allow_many: false,
        }
    }

    /// Sets title of the dialog.
    ///
    pub fn title(mut self, title: impl Into<String>) -> FileDialog {
        self.title = Some(title.into());
        self
    }
    /// Sets label of accepting button.
    ///
    pub fn accept_label(mut self, label: impl Into<String>) -> FileDialog {
        self.accept_label = Some(label.into());
        self
    }
    /// Sets label of cancelling button.
    ///
    pub fn cancel_label(mut self, label: impl Into<String>) -> FileDialog {
        self.cancel_label = Some(label.into());
        self
    }
    /// Sets folder (or file, for saving) that dialog initially shows.
    ///
    pub fn location(mut self, location: impl AsRef<Path>) -> FileDialog {
        self.location = Some(location.as_ref().to_path_buf());
        self
    }
    /// Adds file filter (ignored by folder dialogs).
    ///
    pub fn filter(mut self, name: impl Into<String>, pattern: impl Into<String>) -> FileDialog {
        self.filters.push(FileFilter {
            name: name.into(),
            pattern: pattern.into(),
        });
        self
    }
    /// Allows or forbids choosing many paths (ignored by save dialogs).
    ///
    pub fn allow_many(mut self, allow_many: bool) -> FileDialog {
        self.allow_many = allow_many;
        self
    }

    /// Shows the dialog.
    ///
    /// `callback` is invoked exactly once if this function returns `Ok`, and is not invoked
    /// if it returns `Err`.
    ///
    pub fn show(
        self,
        sdl: &Arc<Sdl>,
        parent: Option<&Window>,
        callback: impl FnOnce(DialogOutcome) + Send + 'static,
    ) -> Result<()> {
        let mut strings = Vec::with_capacity(self.filters.len() * 2);
        for filter in &self.filters {
            strings.push(CString::new(filter.name.as_str())?);
            strings.push(CString::new(filter.pattern.as_str())?);
        }
        let filters: Vec<SDL_DialogFileFilter> = strings
            .chunks_exact(2)
            .map(|pair| SDL_DialogFileFilter {
                name: pair[0].as_ptr(),
                pattern: pair[1].as_ptr(),
            })
            .collect();

        let mut properties = Properties::new(sdl)?;
        if !filters.is_empty() {
            properties.set_pointer(properties::FILE_DIALOG_FILTERS, filters.as_ptr() as *mut c_void)?;
            properties.set_number(properties::FILE_DIALOG_NFILTERS, filters.len() as i64)?;
        }
        if let Some(window) = parent.and_then(Window::raw) {
            properties.set_pointer(properties::FILE_DIALOG_WINDOW, window.cast())?;
        }
        if let Some(location) = &self.location {
            properties.set_string(properties::FILE_DIALOG_LOCATION, &location.to_string_lossy())?;
        }
        properties.set_bool(properties::FILE_DIALOG_MANY, self.allow_many)?;
        for (name, value) in [
            (properties::FILE_DIALOG_TITLE, &self.title),
            (properties::FILE_DIALOG_ACCEPT, &self.accept_label),
            (properties::FILE_DIALOG_CANCEL, &self.cancel_label),
        ] {
            if let Some(value) = value {
                properties.set_string(name, value)?;
            }
        }

        let pending = Box::into_raw(Box::new(PendingDialog {
            sdl: Arc::clone(sdl),
            callback: Box::new(callback),
            _filters: filters,
            _strings: strings,
        }));
        let shown = native!(
            sdl,
            SDL_ShowFileDialogWithProperties(
                self.kind.to_native(),
                Some(dialog_trampoline),
                pending.cast(),
                properties.id(),
            )
        );
        if let Err(error) = shown {
            // SAFETY: native function was not called, so pointer was not handed over.
            drop(unsafe { Box::from_raw(pending) });
            return Err(error);
        }
        log::debug!("{:?} dialog was shown", self.kind);
        Ok(())
    }
}

/// Native callback of file dialogs.
///
/// # Safety
/// `userdata` should be a pointer that was produced by [`FileDialog::show`];
/// `filelist` should be null or null-terminated list of nul-terminated strings.
///
unsafe extern "C" fn dialog_trampoline(
    userdata: *mut c_void,
    filelist: *const *const c_char,
    filter: c_int,
) {
    let pending = Box::from_raw(userdata.cast::<PendingDialog>());
    let outcome = if filelist.is_null() {
        DialogOutcome::Failed(pending.sdl.error("SDL_ShowFileDialogWithProperties"))
    } else if (*filelist).is_null() {
        DialogOutcome::Cancelled
    } else {
        let mut paths = Vec::new();
        let mut cursor = filelist;
        while let Some(path) = string_from_native(*cursor) {
            paths.push(PathBuf::from(path));
            cursor = cursor.add(1);
        }
        DialogOutcome::Selected {
            paths,
            filter: usize::try_from(filter).ok(),
        }
    };
    let PendingDialog { callback, .. } = *pending;
    if catch_unwind(AssertUnwindSafe(move || callback(outcome))).is_err() {
        log::error!("file dialog callback has panicked");
    }
}

/// [`MessageBoxKind`] enum lists kinds of simple message boxes.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageBoxKind {
    /// Error message.
    ///
    Error,
    /// Warning message.
    ///
    Warning,
    /// Informational message.
    ///
    Information,
}

/// Shows modal message box and blocks until user closes it.
///
pub fn show_message_box(
    sdl: &Sdl,
    kind: MessageBoxKind,
    title: &str,
    message: &str,
    parent: Option<&Window>,
) -> Result<()> {
    let flags = match kind {
        MessageBoxKind::Error => SDL_MESSAGEBOX_ERROR,
        MessageBoxKind::Warning => SDL_MESSAGEBOX_WARNING,
        MessageBoxKind::Information => SDL_MESSAGEBOX_INFORMATION,
    };
    let (title, message) = (CString::new(title)?, CString::new(message)?);
    let window = parent.and_then(Window::raw).unwrap_or(null_mut());
    native_ok!(
        sdl,
        SDL_ShowSimpleMessageBox(flags, title.as_ptr(), message.as_ptr(), window)
    )
}

impl fmt::Debug for PendingDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingDialog").finish_non_exhaustive()
    }
}
