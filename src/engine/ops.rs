//! The concrete operation surface.
//!
//! Every operation follows the same recipe: resolve symbolic inputs
//! through the code registry, assemble the parameter list, pick one of
//! the three dataphase shapes, and decode the payload (if any) with the
//! operation's dataset codec. Device-reported failures come back inside
//! [`Reply`], never as errors.

use bytes::Bytes;

use super::{PtpEngine, Reply};
use crate::codec::container::Response;
use crate::codec::dataset::{self, DeviceInfo, ObjectInfo, StorageInfo, VendorExtensionMap};
use crate::error::PtpError;
use crate::registry::codes::{formats, operations as ops};
use crate::registry::{CodeRef, CodeSpace, ExtensionRef};
use crate::transport::PtpTransport;
use crate::types::ALL;

/// Selection arguments shared by `GetNumObjects` and `GetObjectHandles`.
///
/// The wildcard flags map to 0xFFFFFFFF parameters on the wire; asking
/// for the root *and* a specific parent at once is contradictory and is
/// rejected before anything is sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectQuery<'a> {
    /// Store to enumerate
    pub storage_id: u32,
    /// Restrict to one object format (name or code)
    pub object_format: Option<CodeRef<'a>>,
    /// Restrict to children of this association handle
    pub parent_handle: u32,
    /// Enumerate across all stores
    pub all_storage_ids: bool,
    /// Match every format
    pub all_formats: bool,
    /// Restrict to objects in the root of the store
    pub in_root: bool,
}

impl<'a> ObjectQuery<'a> {
    /// Everything on every store.
    #[must_use]
    pub fn all() -> Self {
        Self {
            all_storage_ids: true,
            all_formats: true,
            ..Self::default()
        }
    }

    /// Everything on one store.
    #[must_use]
    pub fn storage(storage_id: u32) -> Self {
        Self {
            storage_id,
            ..Self::default()
        }
    }

    /// Restrict to one object format.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<CodeRef<'a>>) -> Self {
        self.object_format = Some(format.into());
        self
    }

    /// Restrict to children of one association.
    #[must_use]
    pub fn under(mut self, parent_handle: u32) -> Self {
        self.parent_handle = parent_handle;
        self
    }

    /// Restrict to the root of the store.
    #[must_use]
    pub fn in_root(mut self) -> Self {
        self.in_root = true;
        self
    }

    fn params<T: PtpTransport>(&self, engine: &PtpEngine<T>) -> Result<Vec<u32>, PtpError> {
        if self.in_root && self.parent_handle != 0 && self.parent_handle != ALL {
            return Err(PtpError::InvalidArgument {
                message: format!(
                    "cannot query both the root and parent handle 0x{:08X}",
                    self.parent_handle
                ),
            });
        }
        let format = match self.object_format {
            Some(code) => u32::from(engine.registry.resolve(CodeSpace::ObjectFormat, code)?),
            None => 0,
        };
        Ok(vec![
            if self.all_storage_ids { ALL } else { self.storage_id },
            if self.all_formats { ALL } else { format },
            if self.in_root { ALL } else { self.parent_handle },
        ])
    }
}

impl<T: PtpTransport> PtpEngine<T> {
    // --- session lifecycle ---

    /// Open a session.
    ///
    /// The `OpenSession` command itself is the one exchange allowed to
    /// carry SessionID 0; the proposed identifier travels as the first
    /// parameter and is adopted only if the device accepts it.
    ///
    /// # Errors
    ///
    /// Returns transport faults and hook failures; a device-reported
    /// refusal comes back as the response.
    pub async fn open_session(&self) -> Result<Response, PtpError> {
        let response = {
            let mut session = self.session.lock().await;
            let candidate = session.next_session_id();
            tracing::debug!(session = candidate, "open session");
            let command = crate::codec::container::Command::new(
                ops::OPEN_SESSION,
                0,
                0,
                vec![candidate],
            );
            let response = self.transport.mesg(&command).await?;
            if response.is_ok() {
                session.mark_open(candidate);
            }
            response
        };

        if response.is_ok() {
            let session_id = self.session_id().await;
            for hook in &self.hooks {
                hook.post_open(session_id).await?;
            }
        }
        Ok(response)
    }

    /// Close the current session.
    ///
    /// # Errors
    ///
    /// Returns transport faults and hook failures.
    pub async fn close_session(&self) -> Result<Response, PtpError> {
        let session_id = self.session_id().await;
        for hook in &self.hooks {
            hook.pre_close(session_id).await?;
        }
        tracing::debug!(session = session_id, "close session");
        let response = self.run_mesg(ops::CLOSE_SESSION, vec![]).await?;
        if response.is_ok() {
            self.session.lock().await.mark_closed();
        }
        Ok(response)
    }

    /// Reset the device, which also ends the session.
    ///
    /// # Errors
    ///
    /// Returns transport or protocol-integrity faults.
    pub async fn reset_device(&self) -> Result<Response, PtpError> {
        let (response, _) = self.run_recv(ops::RESET_DEVICE, vec![]).await?;
        if response.is_ok() {
            self.session.lock().await.mark_closed();
        }
        Ok(response)
    }

    /// Power the device down, which also ends the session.
    ///
    /// # Errors
    ///
    /// Returns transport or protocol-integrity faults.
    pub async fn power_down(&self) -> Result<Response, PtpError> {
        let (response, _) = self.run_recv(ops::POWER_DOWN, vec![]).await?;
        if response.is_ok() {
            self.session.lock().await.mark_closed();
        }
        Ok(response)
    }

    // --- device information ---

    /// Read the device's `DeviceInfo`. Legal outside a session; when one
    /// is open, its transaction numbering is used.
    ///
    /// # Errors
    ///
    /// Returns transport, integrity, or decode faults.
    pub async fn get_device_info(&self) -> Result<Reply<DeviceInfo>, PtpError> {
        let (response, data) = self.run_recv(ops::GET_DEVICE_INFO, vec![]).await?;
        let data = match data {
            Some(bytes) => Some(DeviceInfo::decode(&mut self.codec.reader(&bytes))?),
            None => None,
        };
        Ok(Reply { response, data })
    }

    /// Read the `DeviceInfo` of one vendor extension on a device that
    /// speaks several.
    ///
    /// # Errors
    ///
    /// Returns a usage fault for an unknown extension name, plus the
    /// usual transport/integrity/decode faults.
    pub async fn get_vendor_device_info<'a>(
        &self,
        extension: impl Into<ExtensionRef<'a>>,
    ) -> Result<Reply<DeviceInfo>, PtpError> {
        let id = self.registry.resolve_extension(extension.into())?;
        let (response, data) = self
            .run_recv(ops::GET_VENDOR_DEVICE_INFO, vec![id])
            .await?;
        let data = match data {
            Some(bytes) => Some(DeviceInfo::decode(&mut self.codec.reader(&bytes))?),
            None => None,
        };
        Ok(Reply { response, data })
    }

    /// Read the vendor extension code map.
    ///
    /// # Errors
    ///
    /// Returns transport, integrity, or decode faults.
    pub async fn get_vendor_extension_maps(
        &self,
    ) -> Result<Reply<Vec<VendorExtensionMap>>, PtpError> {
        let (response, data) = self.run_recv(ops::GET_VENDOR_EXTENSION_MAPS, vec![]).await?;
        let data = match data {
            Some(bytes) => Some(dataset::decode_vendor_extension_maps(
                &mut self.codec.reader(&bytes),
            )?),
            None => None,
        };
        Ok(Reply { response, data })
    }

    // --- storage ---

    /// List the device's storage IDs.
    ///
    /// # Errors
    ///
    /// Returns transport, integrity, or decode faults.
    pub async fn get_storage_ids(&self) -> Result<Reply<Vec<u32>>, PtpError> {
        let (response, data) = self.run_recv(ops::GET_STORAGE_IDS, vec![]).await?;
        let data = match data {
            Some(bytes) => Some(dataset::decode_handle_array(
                &mut self.codec.reader(&bytes),
            )?),
            None => None,
        };
        Ok(Reply { response, data })
    }

    /// Describe one store.
    ///
    /// # Errors
    ///
    /// Returns transport, integrity, or decode faults.
    pub async fn get_storage_info(&self, storage_id: u32) -> Result<Reply<StorageInfo>, PtpError> {
        let (response, data) = self
            .run_recv(ops::GET_STORAGE_INFO, vec![storage_id])
            .await?;
        let data = match data {
            Some(bytes) => Some(StorageInfo::decode(&mut self.codec.reader(&bytes))?),
            None => None,
        };
        Ok(Reply { response, data })
    }

    // --- object enumeration ---

    /// Count objects matching `query`; the count rides in the first
    /// response parameter.
    ///
    /// # Errors
    ///
    /// Returns a usage fault for a contradictory query, plus
    /// transport/integrity faults.
    pub async fn get_num_objects(&self, query: &ObjectQuery<'_>) -> Result<Reply<u32>, PtpError> {
        let params = query.params(self)?;
        let (response, _) = self.run_recv(ops::GET_NUM_OBJECTS, params).await?;
        let data = response.params.first().copied();
        Ok(Reply { response, data })
    }

    /// List handles of objects matching `query`.
    ///
    /// # Errors
    ///
    /// Returns a usage fault for a contradictory query, plus
    /// transport/integrity/decode faults.
    pub async fn get_object_handles(
        &self,
        query: &ObjectQuery<'_>,
    ) -> Result<Reply<Vec<u32>>, PtpError> {
        let params = query.params(self)?;
        let (response, data) = self.run_recv(ops::GET_OBJECT_HANDLES, params).await?;
        let data = match data {
            Some(bytes) => Some(dataset::decode_handle_array(
                &mut self.codec.reader(&bytes),
            )?),
            None => None,
        };
        Ok(Reply { response, data })
    }

    // --- object transfer ---

    /// Read the `ObjectInfo` dataset for a handle.
    ///
    /// # Errors
    ///
    /// Returns transport, integrity, or decode faults.
    pub async fn get_object_info(&self, handle: u32) -> Result<Reply<ObjectInfo>, PtpError> {
        let (response, data) = self.run_recv(ops::GET_OBJECT_INFO, vec![handle]).await?;
        let data = match data {
            Some(bytes) => Some(ObjectInfo::decode(&mut self.codec.reader(&bytes))?),
            None => None,
        };
        Ok(Reply { response, data })
    }

    /// Retrieve an object's bytes.
    ///
    /// # Errors
    ///
    /// Returns transport or integrity faults.
    pub async fn get_object(&self, handle: u32) -> Result<Reply<Bytes>, PtpError> {
        let (response, data) = self.run_recv(ops::GET_OBJECT, vec![handle]).await?;
        Ok(Reply { response, data })
    }

    /// Retrieve part of an object. `until_end` ignores `max_bytes`; the
    /// first response parameter reports how much the device actually
    /// sent.
    ///
    /// # Errors
    ///
    /// Returns transport or integrity faults.
    pub async fn get_partial_object(
        &self,
        handle: u32,
        offset: u32,
        max_bytes: u32,
        until_end: bool,
    ) -> Result<Reply<Bytes>, PtpError> {
        let (response, data) = self
            .run_recv(
                ops::GET_PARTIAL_OBJECT,
                vec![handle, offset, if until_end { ALL } else { max_bytes }],
            )
            .await?;
        Ok(Reply { response, data })
    }

    /// Retrieve an object's thumbnail.
    ///
    /// # Errors
    ///
    /// Returns transport or integrity faults.
    pub async fn get_thumb(&self, handle: u32) -> Result<Reply<Bytes>, PtpError> {
        let (response, data) = self.run_recv(ops::GET_THUMB, vec![handle]).await?;
        Ok(Reply { response, data })
    }

    /// Retrieve an object resized to `width` x `height` (0 keeps the
    /// aspect ratio, where the device supports that).
    ///
    /// # Errors
    ///
    /// Returns transport or integrity faults.
    pub async fn get_resized_image_object(
        &self,
        handle: u32,
        width: u32,
        height: u32,
    ) -> Result<Reply<Bytes>, PtpError> {
        let (response, data) = self
            .run_recv(ops::GET_RESIZED_IMAGE_OBJECT, vec![handle, width, height])
            .await?;
        Ok(Reply { response, data })
    }

    /// Announce an object about to be sent; the device answers with the
    /// store, parent, and handle it reserved in its response parameters.
    ///
    /// # Errors
    ///
    /// Returns transport or codec faults.
    pub async fn send_object_info(
        &self,
        info: &ObjectInfo,
        storage_id: u32,
        parent_handle: u32,
    ) -> Result<Response, PtpError> {
        let mut w = self.codec.writer();
        info.encode(&mut w)?;
        self.run_send(
            ops::SEND_OBJECT_INFO,
            vec![storage_id, parent_handle],
            w.into_bytes(),
        )
        .await
    }

    /// Send the object bytes announced by the latest `SendObjectInfo`.
    ///
    /// # Errors
    ///
    /// Returns transport faults; a transient device failure is retried
    /// once automatically.
    pub async fn send_object(&self, data: Bytes) -> Result<Response, PtpError> {
        self.run_send(ops::SEND_OBJECT, vec![], data).await
    }

    // --- object management ---

    /// Delete one object, all objects (`delete_all`), or all images
    /// (`delete_all_images`). When both flags are set, everything goes.
    ///
    /// # Errors
    ///
    /// Returns a usage fault for an unknown format name, plus transport
    /// faults.
    pub async fn delete_object<'a>(
        &self,
        handle: u32,
        object_format: impl Into<CodeRef<'a>>,
        delete_all: bool,
        delete_all_images: bool,
    ) -> Result<Response, PtpError> {
        let mut format = u32::from(
            self.registry
                .resolve(CodeSpace::ObjectFormat, object_format.into())?,
        );
        let handle = if delete_all || delete_all_images {
            ALL
        } else {
            handle
        };
        if delete_all_images && !delete_all && format == 0 {
            format = u32::from(formats::UNDEFINED_IMAGE.raw());
        }
        self.run_mesg(ops::DELETE_OBJECT, vec![handle, format]).await
    }

    /// Move an object under a new parent association (0 for the root of
    /// `storage_id`).
    ///
    /// # Errors
    ///
    /// Returns transport faults.
    pub async fn move_object(
        &self,
        handle: u32,
        storage_id: u32,
        parent_handle: u32,
    ) -> Result<Response, PtpError> {
        self.run_mesg(ops::MOVE_OBJECT, vec![handle, storage_id, parent_handle])
            .await
    }

    /// Copy an object under a new parent association; the new handle
    /// rides in the first response parameter.
    ///
    /// # Errors
    ///
    /// Returns transport faults.
    pub async fn copy_object(
        &self,
        handle: u32,
        storage_id: u32,
        parent_handle: u32,
    ) -> Result<Response, PtpError> {
        self.run_mesg(ops::COPY_OBJECT, vec![handle, storage_id, parent_handle])
            .await
    }

    // --- capture ---

    /// Capture with current settings into `storage_id` (0 lets the
    /// device choose).
    ///
    /// # Errors
    ///
    /// Returns a usage fault for an unknown format name, plus
    /// transport/integrity faults.
    pub async fn initiate_capture<'a>(
        &self,
        storage_id: u32,
        object_format: impl Into<CodeRef<'a>>,
    ) -> Result<Response, PtpError> {
        let format = u32::from(
            self.registry
                .resolve(CodeSpace::ObjectFormat, object_format.into())?,
        );
        let (response, _) = self
            .run_recv(ops::INITIATE_CAPTURE, vec![storage_id, format])
            .await?;
        Ok(response)
    }

    /// Begin an open-ended capture session (ends with
    /// [`PtpEngine::terminate_open_capture`]).
    ///
    /// # Errors
    ///
    /// Returns a usage fault for an unknown format name, plus
    /// transport/integrity faults.
    pub async fn initiate_open_capture<'a>(
        &self,
        storage_id: u32,
        object_format: impl Into<CodeRef<'a>>,
    ) -> Result<Response, PtpError> {
        let format = u32::from(
            self.registry
                .resolve(CodeSpace::ObjectFormat, object_format.into())?,
        );
        let (response, _) = self
            .run_recv(ops::INITIATE_OPEN_CAPTURE, vec![storage_id, format])
            .await?;
        Ok(response)
    }

    /// End the open capture started by the transaction `transaction_id`.
    ///
    /// # Errors
    ///
    /// Returns transport/integrity faults.
    pub async fn terminate_open_capture(&self, transaction_id: u32) -> Result<Response, PtpError> {
        let (response, _) = self
            .run_recv(ops::TERMINATE_OPEN_CAPTURE, vec![transaction_id])
            .await?;
        Ok(response)
    }
}
