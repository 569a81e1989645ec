//! `datacore::assets` submodule provides traits and structs that encapsulate work with assets.
//!
//! It defines traits like [`FromFile`] and [`ToFile`] that are implemented on structs which are
//! either serializable or deserializable ([`WindowSettings`](crate::utils::WindowSettings),
//! [`AppMetadata`](crate::nativecore::subsystems::AppMetadata), [`ProgressOptions`](crate::utils::ProgressOptions),
//! [`LibraryPaths`](crate::nativecore::library::LibraryPaths) and any other `serde` type).
//!
//! `ggsdl` serializes `Rust`-side data by using Concise Binary Object Representation format.
//!

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::{create_dir_all, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// [`FromFile`] trait is implemented on objects that can be restored from file data (deserialized).
///
/// There is an auto implementation on all types that implement `serde::Deserialize`.
///
pub trait FromFile {
    /// Deserializes object from file.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized;
}
impl<T: for<'a> Deserialize<'a>> FromFile for T {
    /// Restores data from given file.
    ///
    /// This function returns an error if file does not exist or if data is not recoverable.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self> {
        let file = BufReader::new(File::open(filename)?);
        Ok(serde_cbor::from_reader(file)?)
    }
}
/// [`ToFile`] trait is implemented on objects that can be saved to file (serialized).
///
/// There is an auto implementation on all types that implement `serde::Serialize`.
///
pub trait ToFile {
    /// Serializes object to file.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<()>;
}
impl<T: Serialize> ToFile for T {
    /// Saves data to file.
    ///
    /// This implementation will create a file if it does not exist, and will truncate it if it does.
    ///
    /// This function fails if file creation or truncation fails or if data is not
    /// serializable by CBOR.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<()> {
        let mut file = BufWriter::new(File::create(filename)?);
        serde_cbor::to_writer(&mut file, self)?;
        Ok(file.flush()?)
    }
}

/// [`AssetFormat`] trait registers types of assets by reserving a folder for them.
///
pub trait AssetFormat {
    /// Name of folder in which assets of this format will be stored.
    ///
    fn format_folder(&self) -> &'static str;
}
/// [`ImageAssetFormat`] represents images that are loaded as surfaces.
/// Its folder is 'images'.
///
#[derive(Debug, Clone, Copy)]
pub struct ImageAssetFormat;
impl AssetFormat for ImageAssetFormat {
    fn format_folder(&self) -> &'static str {
        "images"
    }
}
/// [`FontAssetFormat`] represents truetype fonts.
/// Its folder is 'fonts'.
///
#[derive(Debug, Clone, Copy)]
pub struct FontAssetFormat;
impl AssetFormat for FontAssetFormat {
    fn format_folder(&self) -> &'static str {
        "fonts"
    }
}
/// [`ConfigAssetFormat`] represents config data (settings that are saved with [`ToFile`]).
/// Its folder is 'configs'.
///
#[derive(Debug, Clone, Copy)]
pub struct ConfigAssetFormat;
impl AssetFormat for ConfigAssetFormat {
    fn format_folder(&self) -> &'static str {
        "configs"
    }
}

/// [`AssetManager`] struct treats directory as a storage for application assets.
///
/// Initializing [`AssetManager`] in a directory creates folders of given formats (if they are not present).
///
#[derive(Debug)]
pub struct AssetManager {
    /// Directory that is being handled by [`AssetManager`].
    ///
    root_directory: PathBuf,
}
impl AssetManager {
    /// Initializes [`AssetManager`] in a directory.
    ///
    /// ```rust,no_run
    /// # use ggsdl::datacore::assets::{AssetManager, AssetFormat, ConfigAssetFormat, FontAssetFormat};
    /// let manager: AssetManager = AssetManager::initialize_at(
    ///     "assets",
    ///     &[FontAssetFormat.format_folder(), ConfigAssetFormat.format_folder()]
    /// )?;
    /// # Ok::<(), ggsdl::Error>(())
    /// ```
    ///
    pub fn initialize_at(path: impl AsRef<Path>, formats: &[&'static str]) -> Result<Self> {
        let root_directory = path.as_ref().to_path_buf();
        for format in formats {
            create_dir_all(root_directory.join(format))?;
        }
        create_dir_all(&root_directory)?;
        Ok(AssetManager { root_directory })
    }

    /// Returns full path of asset.
    ///
    pub fn path_of(&self, filename: impl AsRef<Path>, format: impl AssetFormat) -> PathBuf {
        self.root_directory
            .join(format.format_folder())
            .join(filename)
    }
    /// Saves asset using its format.
    ///
    pub fn save_asset<T: ToFile>(
        &self,
        filename: impl AsRef<Path>,
        format: impl AssetFormat,
        asset: &T,
    ) -> Result<()> {
        asset.to_file(self.path_of(filename, format))
    }
    /// Loads asset using its format.
    ///
    pub fn load_asset<T: FromFile>(
        &self,
        filename: impl AsRef<Path>,
        format: impl AssetFormat,
    ) -> Result<T> {
        T::from_file(self.path_of(filename, format))
    }
}
