//! The device property knowledge cache.
//!
//! A bare property value payload carries no type tag; the cache remembers
//! each property's `DataTypeCode` from its descriptor so value payloads
//! can be built and parsed. It is populated by one explicit pre-fetch
//! pass, refreshed by any later descriptor read, and never invalidated
//! wholesale short of dropping the engine.

use std::collections::HashMap;

use super::{PtpEngine, Reply};
use crate::codec::PtpValue;
use crate::codec::container::Response;
use crate::codec::dataset::{DeviceInfo, DevicePropDesc, decode_prop_value};
use crate::error::PtpError;
use crate::registry::codes::operations as ops;
use crate::registry::{CodeRef, CodeSpace};
use crate::transport::PtpTransport;
use crate::types::{DataTypeCode, ALL};

/// What the engine has learned about the device's properties.
#[derive(Debug, Default)]
pub struct Knowledge {
    enabled: bool,
    /// `None` marks a property whose descriptor fetch failed: known to
    /// exist, type unknown.
    descriptors: HashMap<u16, Option<DevicePropDesc>>,
}

impl Knowledge {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the pre-fetch pass has run.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Properties with a cached descriptor.
    #[must_use]
    pub fn known_properties(&self) -> usize {
        self.descriptors.values().flatten().count()
    }

    fn data_type_of(&self, property: u16) -> Option<DataTypeCode> {
        self.descriptors
            .get(&property)
            .and_then(|entry| entry.as_ref())
            .map(|desc| desc.data_type)
    }
}

impl<T: PtpTransport> PtpEngine<T> {
    /// Pre-fetch every supported property's descriptor inside one
    /// session, enabling typed value handling.
    ///
    /// A fetch failure for one property is retained as "unknown" for that
    /// property and does not abort the pass. Returns the `DeviceInfo`
    /// gathered on the way; if the device refused `GetDeviceInfo`, the
    /// cache stays disabled and the refusal is in the reply.
    ///
    /// # Errors
    ///
    /// Returns transport, integrity, or decode faults from the initial
    /// `GetDeviceInfo` exchange.
    pub async fn obtain_knowledge(&self) -> Result<Reply<DeviceInfo>, PtpError> {
        tracing::debug!("gathering descriptors for all device properties");
        let reply = self.get_device_info().await?;
        let Some(info) = &reply.data else {
            tracing::debug!(response = %reply.response.code, "no DeviceInfo; cache disabled");
            return Ok(reply);
        };

        let properties = info.device_properties_supported.clone();
        self.with_session(async {
            for property in properties {
                let entry = match self.get_device_prop_desc(property).await {
                    Ok(desc_reply) => desc_reply.data,
                    Err(err) => {
                        tracing::debug!(
                            property = %property,
                            error = %err,
                            "descriptor fetch failed; retained as unknown"
                        );
                        None
                    }
                };
                self.knowledge
                    .lock()
                    .await
                    .descriptors
                    .insert(property.raw(), entry);
            }
            Ok(())
        })
        .await?;

        self.knowledge.lock().await.enabled = true;
        Ok(reply)
    }

    /// Whether the knowledge cache is active.
    pub async fn has_knowledge(&self) -> bool {
        self.knowledge.lock().await.is_enabled()
    }

    /// The cached descriptor for a property, if the cache holds one.
    ///
    /// # Errors
    ///
    /// Returns a usage fault for an unknown property name.
    pub async fn cached_prop_desc<'a>(
        &self,
        property: impl Into<CodeRef<'a>>,
    ) -> Result<Option<DevicePropDesc>, PtpError> {
        let code = self
            .registry
            .resolve(CodeSpace::Property, property.into())?;
        Ok(self
            .knowledge
            .lock()
            .await
            .descriptors
            .get(&code)
            .and_then(Clone::clone))
    }

    /// Read a property's descriptor. With the cache enabled this is also
    /// the per-property refresh: the cached entry is replaced.
    ///
    /// # Errors
    ///
    /// Returns a usage fault for an unknown property name, plus
    /// transport/integrity/decode faults.
    pub async fn get_device_prop_desc<'a>(
        &self,
        property: impl Into<CodeRef<'a>>,
    ) -> Result<Reply<DevicePropDesc>, PtpError> {
        let code = self
            .registry
            .resolve(CodeSpace::Property, property.into())?;
        let (response, data) = self
            .run_recv(ops::GET_DEVICE_PROP_DESC, vec![u32::from(code)])
            .await?;
        let data = match data {
            Some(bytes) => Some(DevicePropDesc::decode(&mut self.codec.reader(&bytes))?),
            None => None,
        };

        let mut knowledge = self.knowledge.lock().await;
        if knowledge.enabled && data.is_some() {
            tracing::debug!(
                property = %self.registry.describe(CodeSpace::Property, code),
                "updating property knowledge"
            );
            knowledge.descriptors.insert(code, data.clone());
        }
        drop(knowledge);

        Ok(Reply { response, data })
    }

    /// Read a property's current value.
    ///
    /// With the cache enabled the payload is decoded using the cached
    /// `DataTypeCode`; otherwise (or when the cached type is one this
    /// client does not implement) the raw payload comes back opaquely as
    /// [`PtpValue::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns a usage fault for an unknown property name, plus
    /// transport/integrity/decode faults.
    pub async fn get_device_prop_value<'a>(
        &self,
        property: impl Into<CodeRef<'a>>,
    ) -> Result<Reply<PtpValue>, PtpError> {
        let code = self
            .registry
            .resolve(CodeSpace::Property, property.into())?;
        let (response, data) = self
            .run_recv(ops::GET_DEVICE_PROP_VALUE, vec![u32::from(code)])
            .await?;
        let data = match data {
            None => None,
            Some(bytes) => {
                let knowledge = self.knowledge.lock().await;
                let value = match knowledge.data_type_of(code) {
                    Some(ty) if knowledge.is_enabled() => {
                        decode_prop_value(&mut self.codec.reader(&bytes), ty)?
                    }
                    _ => PtpValue::Undefined(bytes),
                };
                Some(value)
            }
        };
        Ok(Reply { response, data })
    }

    /// Write a property value.
    ///
    /// With the cache enabled, a typed value must match the property's
    /// cached `DataTypeCode`; [`PtpValue::Undefined`] always passes its
    /// bytes through unchecked for callers that know better.
    ///
    /// # Errors
    ///
    /// Returns a usage fault for an unknown property name or a type
    /// mismatch against the cache, plus transport faults.
    pub async fn set_device_prop_value<'a>(
        &self,
        property: impl Into<CodeRef<'a>>,
        value: &PtpValue,
    ) -> Result<Response, PtpError> {
        let code = self
            .registry
            .resolve(CodeSpace::Property, property.into())?;

        {
            let knowledge = self.knowledge.lock().await;
            if let Some(expected) = knowledge.data_type_of(code) {
                let typed = !matches!(value, PtpValue::Undefined(_));
                if knowledge.is_enabled()
                    && typed
                    && PtpValue::is_known_type(expected)
                    && value.data_type() != expected
                {
                    return Err(PtpError::InvalidArgument {
                        message: format!(
                            "property {} expects data type {}, got {}",
                            self.registry.describe(CodeSpace::Property, code),
                            expected,
                            value.data_type()
                        ),
                    });
                }
            }
        }

        let mut w = self.codec.writer();
        value.encode(&mut w)?;
        self.run_send(ops::SET_DEVICE_PROP_VALUE, vec![u32::from(code)], w.into_bytes())
            .await
    }

    /// Reset one property (or with `reset_all`, every property) to its
    /// factory default.
    ///
    /// # Errors
    ///
    /// Returns a usage fault for an unknown property name, plus
    /// transport/integrity faults.
    pub async fn reset_device_prop_value<'a>(
        &self,
        property: impl Into<CodeRef<'a>>,
        reset_all: bool,
    ) -> Result<Response, PtpError> {
        let code = self
            .registry
            .resolve(CodeSpace::Property, property.into())?;
        let param = if reset_all { ALL } else { u32::from(code) };
        let (response, _) = self
            .run_recv(ops::RESET_DEVICE_PROP_VALUE, vec![param])
            .await?;
        Ok(response)
    }
}
