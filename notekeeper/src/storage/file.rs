use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use log::{debug, error, info, trace};
use tokio::sync::Mutex;
use data::{Note, NoteDraft, NoteId, SortOrder, UserId};
use crate::clock::{Clock, SystemClock};
use crate::config::app_config::AppConfig;
use crate::lib_constants::TMP_FILENAME_INFIX;
use crate::storage::{check_access, missing_note_on_delete, NoteStorage, StorageError};
use io_trait::{NotesFileIo, ProductionNotesFileIo};

mod io_trait;

pub type FileNoteStorage = FileNoteStorageImpl<ProductionNotesFileIo, SystemClock>;

/// All notes as one JSON array in a single file.
///
/// Every mutation rewrites the whole file through a temporary sibling and a
/// rename, so a reader sees either the old or the new array.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct FileNoteStorageImpl<Io: NotesFileIo, C: Clock> {
    io: Io,
    clock: C,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileNoteStorage {
    pub async fn new(
        app_config: &AppConfig,
    ) -> Result<FileNoteStorage, StorageError> {
        Self::new_internal(
            app_config.storage.notes_file.clone(),
            ProductionNotesFileIo::new(),
            SystemClock,
        ).await
    }
}

#[allow(private_bounds)]
impl<Io: NotesFileIo, C: Clock> FileNoteStorageImpl<Io, C> {
    async fn new_internal(
        path: PathBuf,
        io: Io,
        clock: C,
    ) -> Result<Self, StorageError> {
        debug!("creating file note storage at \"{}\"", path.display());
        let storage = FileNoteStorageImpl {
            io,
            clock,
            path,
            write_lock: Mutex::new(()),
        };
        let notes = storage.load().await?;
        info!(
            "file note storage at \"{}\" holds {} notes",
            storage.path.display(),
            notes.len(),
        );
        Ok(storage)
    }

    async fn load(&self) -> Result<Vec<Note>, StorageError> {
        trace!("reading notes file \"{}\"", self.path.display());
        let bytes = match self.io.read_file(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "notes file \"{}\" does not exist yet, starting empty",
                    self.path.display(),
                );
                return Ok(Vec::new());
            },
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| {
                error!(
                    "notes file \"{}\" is corrupt, refusing to touch it: {e}",
                    self.path.display(),
                );
                StorageError::Parse(e)
            })
    }

    async fn save(&self, notes: &[Note]) -> Result<(), StorageError> {
        let data = serde_json::to_vec_pretty(notes)
            .map_err(StorageError::Serialization)?;
        let tmp_path = self.tmp_path();
        trace!(
            "writing {} notes to tmp file \"{}\"",
            notes.len(),
            tmp_path.display(),
        );
        if let Err(e) = self.io.write_file(&tmp_path, data).await {
            error!(
                "failed to write tmp file \"{}\": {e}",
                tmp_path.display(),
            );
            self.discard_tmp(&tmp_path).await;
            return Err(e.into());
        }
        if let Err(e) = self.io.rename_file(&tmp_path, &self.path).await {
            error!(
                "failed to rename tmp file \"{}\" to \"{}\": {e}",
                tmp_path.display(),
                self.path.display(),
            );
            self.discard_tmp(&tmp_path).await;
            return Err(e.into());
        }
        Ok(())
    }

    /// A failed write may or may not have created the file.
    async fn discard_tmp(&self, tmp_path: &Path) {
        match self.io.remove_file(tmp_path).await {
            Ok(()) => {},
            Err(e) if e.kind() == ErrorKind::NotFound => {},
            Err(e) => error!(
                "failed to remove tmp file \"{}\": {e}",
                tmp_path.display(),
            ),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(TMP_FILENAME_INFIX);
        name.push(self.io.generate_uuid().hyphenated().to_string());
        self.path.with_file_name(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn visible_to(note: &Note, owner: Option<UserId>) -> bool {
    owner.is_none() || note.owner == owner
}

#[async_trait]
impl<Io: NotesFileIo, C: Clock> NoteStorage for FileNoteStorageImpl<Io, C> {
    async fn list_notes(
        &self,
        owner: Option<UserId>,
        order: SortOrder,
    ) -> Result<Vec<Note>, StorageError> {
        let mut notes: Vec<Note> = self.load()
            .await?
            .into_iter()
            .filter(|note| visible_to(note, owner))
            .collect();
        order.sort(&mut notes);
        Ok(notes)
    }

    async fn add_note(
        &self,
        owner: Option<UserId>,
        draft: NoteDraft,
    ) -> Result<Note, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.load().await?;
        let id = NoteId(
            notes.iter()
                .map(|note| note.id.0)
                .max()
                .unwrap_or(0) + 1
        );
        let note = Note::new(id, draft, self.clock.now(), owner);
        debug!("adding note {id} to \"{}\"", self.path.display());
        notes.push(note.clone());
        self.save(&notes).await?;
        Ok(note)
    }

    async fn get_note(
        &self,
        owner: Option<UserId>,
        id: NoteId,
    ) -> Result<Note, StorageError> {
        let note = self.load()
            .await?
            .into_iter()
            .find(|note| note.id == id)
            .ok_or(StorageError::NoteNotFound)?;
        check_access(note.owner, owner)?;
        Ok(note)
    }

    async fn edit_note(
        &self,
        owner: Option<UserId>,
        id: NoteId,
        draft: NoteDraft,
    ) -> Result<Note, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.load().await?;
        let note = notes.iter_mut()
            .find(|note| note.id == id)
            .ok_or(StorageError::NoteNotFound)?;
        check_access(note.owner, owner)?;
        note.apply(draft, self.clock.now());
        let edited = note.clone();
        debug!("editing note {id} in \"{}\"", self.path.display());
        self.save(&notes).await?;
        Ok(edited)
    }

    async fn delete_note(
        &self,
        owner: Option<UserId>,
        id: NoteId,
    ) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.load().await?;
        let position = match notes.iter().position(|note| note.id == id) {
            Some(position) => position,
            None => {
                debug!("note {id} to delete does not exist");
                return missing_note_on_delete(owner);
            },
        };
        check_access(notes[position].owner, owner)?;
        notes.remove(position);
        debug!("deleting note {id} from \"{}\"", self.path.display());
        self.save(&notes).await
    }

    async fn search_notes(
        &self,
        owner: Option<UserId>,
        query: &str,
        order: SortOrder,
    ) -> Result<Vec<Note>, StorageError> {
        let query = query.to_lowercase();
        let mut notes: Vec<Note> = self.load()
            .await?
            .into_iter()
            .filter(|note| visible_to(note, owner) && note.matches(&query))
            .collect();
        order.sort(&mut notes);
        Ok(notes)
    }
}
