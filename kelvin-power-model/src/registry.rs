//! Element registry and driver-interface binding.
//!
//! A [`PowerModel`] is the module side of the platform's registration
//! contract: construction associates exactly one configuration with each
//! element, and the platform then looks interfaces up by slot index
//! rather than by name. Once built, the registry is immutable and every
//! call borrows it shared, so a host can hand it to concurrent callers
//! behind an `Arc` without locking.

use std::collections::HashSet;

use strum::EnumCount;
use thiserror::Error;

use crate::api::{ApiIdx, DriverError, ThermalDriver};
use crate::config::{ConfigError, PowerModelConfig};
use crate::model::LinearModel;
use crate::tracing::prelude::*;
use crate::types::{ElementId, Level, Power};

/// Per-element state derived from configuration.
#[derive(Debug, Clone)]
struct ElementCtx {
    label: String,
    model: LinearModel,
}

/// Errors returned when binding a driver interface by raw index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("API index {index} is out of range (module exposes {count})")]
    InvalidApiIndex { index: usize, count: usize },
}

/// Descriptor of one configured element.
#[derive(Debug, Clone, Copy)]
pub struct ElementDescriptor<'a> {
    /// Table index the platform addresses the element by.
    pub id: ElementId,
    /// Configured label.
    pub label: &'a str,
    /// Configured coefficient.
    pub coeff: u32,
}

/// Power-model module instance.
///
/// Owns one context per configured element and implements the conversion
/// interface the thermal-management driver binds to.
#[derive(Debug)]
pub struct PowerModel {
    elements: Vec<ElementCtx>,
}

impl PowerModel {
    /// Validate `config` and build the per-element context table.
    ///
    /// Ids are assigned in declaration order. A constructed registry can
    /// no longer fail validation, so driver calls only ever see range
    /// and overflow errors.
    pub fn new(config: PowerModelConfig) -> Result<Self, ConfigError> {
        if config.elements.is_empty() {
            return Err(ConfigError::NoElements);
        }

        let mut seen = HashSet::new();
        let mut elements = Vec::with_capacity(config.elements.len());

        for (index, entry) in config.elements.into_iter().enumerate() {
            if entry.label.is_empty() {
                return Err(ConfigError::EmptyLabel { index });
            }
            if !seen.insert(entry.label.clone()) {
                return Err(ConfigError::DuplicateLabel { label: entry.label });
            }

            let model =
                LinearModel::new(entry.config.coeff).ok_or_else(|| ConfigError::ZeroCoefficient {
                    label: entry.label.clone(),
                })?;

            debug!(
                element = index,
                label = %entry.label,
                coeff = entry.config.coeff,
                "Configured power-model element"
            );

            elements.push(ElementCtx {
                label: entry.label,
                model,
            });
        }

        info!(element_count = elements.len(), "Power model ready");

        Ok(Self { elements })
    }

    /// Look up a driver interface by typed slot.
    pub fn api(&self, idx: ApiIdx) -> &dyn ThermalDriver {
        match idx {
            ApiIdx::ThermalDriver => self,
        }
    }

    /// Look up a driver interface by raw index, the way the platform's
    /// registration mechanism does.
    pub fn bind(&self, index: usize) -> Result<&dyn ThermalDriver, BindError> {
        let idx = ApiIdx::from_repr(index).ok_or(BindError::InvalidApiIndex {
            index,
            count: ApiIdx::COUNT,
        })?;

        Ok(self.api(idx))
    }

    /// Number of configured elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Find an element's id by its label.
    pub fn element_by_label(&self, label: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|ctx| ctx.label == label)
            .map(ElementId)
    }

    /// Iterate over configured elements in declaration order.
    pub fn elements(&self) -> impl Iterator<Item = ElementDescriptor<'_>> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, ctx)| ElementDescriptor {
                id: ElementId(index),
                label: &ctx.label,
                coeff: ctx.model.coeff(),
            })
    }

    fn ctx(&self, id: ElementId) -> Result<&ElementCtx, DriverError> {
        self.elements.get(id.0).ok_or(DriverError::UnknownElement {
            id,
            count: self.elements.len(),
        })
    }
}

impl ThermalDriver for PowerModel {
    fn level_to_power(&self, element: ElementId, level: Level) -> Result<Power, DriverError> {
        let ctx = self.ctx(element)?;

        let power = ctx
            .model
            .level_to_power(level)
            .ok_or_else(|| DriverError::PowerOverflow {
                label: ctx.label.clone(),
                coeff: ctx.model.coeff(),
                level,
            })?;

        trace!(
            element = %element,
            label = %ctx.label,
            level = %level,
            power = %power,
            "Level to power"
        );

        Ok(power)
    }

    fn power_to_level(&self, element: ElementId, power: Power) -> Result<Level, DriverError> {
        let ctx = self.ctx(element)?;
        let level = ctx.model.power_to_level(power);

        trace!(
            element = %element,
            label = %ctx.label,
            power = %power,
            level = %level,
            "Power to level"
        );

        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ElementConfig, ElementEntry};

    fn table(entries: &[(&str, u32)]) -> PowerModelConfig {
        PowerModelConfig {
            elements: entries
                .iter()
                .map(|(label, coeff)| ElementEntry {
                    label: (*label).to_string(),
                    config: ElementConfig { coeff: *coeff },
                })
                .collect(),
        }
    }

    #[test]
    fn should_associate_one_config_with_each_element() {
        let model = PowerModel::new(table(&[("big", 3), ("little", 1)])).unwrap();

        assert_eq!(model.element_count(), 2);

        let elements: Vec<_> = model.elements().collect();
        assert_eq!(elements[0].id, ElementId(0));
        assert_eq!(elements[0].label, "big");
        assert_eq!(elements[0].coeff, 3);
        assert_eq!(elements[1].id, ElementId(1));
        assert_eq!(elements[1].label, "little");
        assert_eq!(elements[1].coeff, 1);
    }

    #[test]
    fn should_reject_an_empty_table() {
        assert_eq!(
            PowerModel::new(table(&[])).unwrap_err(),
            ConfigError::NoElements
        );
    }

    #[test]
    fn should_reject_empty_labels() {
        assert_eq!(
            PowerModel::new(table(&[("soc", 2), ("", 1)])).unwrap_err(),
            ConfigError::EmptyLabel { index: 1 }
        );
    }

    #[test]
    fn should_reject_duplicate_labels() {
        assert_eq!(
            PowerModel::new(table(&[("soc", 2), ("soc", 1)])).unwrap_err(),
            ConfigError::DuplicateLabel {
                label: "soc".into()
            }
        );
    }

    #[test]
    fn should_reject_zero_coefficients() {
        assert_eq!(
            PowerModel::new(table(&[("soc", 2), ("gpu", 0)])).unwrap_err(),
            ConfigError::ZeroCoefficient {
                label: "gpu".into()
            }
        );
    }

    #[test]
    fn should_bind_the_thermal_driver_at_its_slot() {
        let model = PowerModel::new(table(&[("soc", 2)])).unwrap();

        let driver = model.bind(ApiIdx::ThermalDriver as usize).unwrap();
        let power = driver.level_to_power(ElementId(0), Level(5)).unwrap();
        assert_eq!(power, Power(10));

        // Raw-index binding and typed lookup reach the same implementation.
        let typed = model.api(ApiIdx::ThermalDriver);
        assert_eq!(typed.level_to_power(ElementId(0), Level(5)).unwrap(), power);
    }

    #[test]
    fn should_drive_conversions_through_a_raw_bound_interface() {
        let model = PowerModel::new(table(&[("soc", 2)])).unwrap();
        let driver = model.bind(0).unwrap();

        assert_eq!(
            driver.level_to_power(ElementId(0), Level(6)).unwrap(),
            Power(12)
        );
        assert_eq!(
            driver.power_to_level(ElementId(0), Power(13)).unwrap(),
            Level(6)
        );
        assert!(driver.level_to_power(ElementId(0), Level(u32::MAX)).is_err());
        assert!(model.bind(ApiIdx::COUNT).is_err());
    }

    #[test]
    fn should_refuse_indices_at_or_past_the_count() {
        let model = PowerModel::new(table(&[("soc", 2)])).unwrap();

        assert_eq!(
            model.bind(ApiIdx::COUNT).err(),
            Some(BindError::InvalidApiIndex {
                index: ApiIdx::COUNT,
                count: ApiIdx::COUNT,
            })
        );
        assert!(model.bind(usize::MAX).is_err());
    }

    #[test]
    fn should_report_unknown_elements() {
        let model = PowerModel::new(table(&[("soc", 2)])).unwrap();
        let driver = model.api(ApiIdx::ThermalDriver);

        let err = driver.level_to_power(ElementId(7), Level(1)).unwrap_err();
        assert_eq!(err, DriverError::UnknownElement {
            id: ElementId(7),
            count: 1,
        });

        let err = driver.power_to_level(ElementId(7), Power(1)).unwrap_err();
        assert_eq!(err, DriverError::UnknownElement {
            id: ElementId(7),
            count: 1,
        });
    }

    #[test]
    fn should_surface_overflow_with_element_context() {
        let model = PowerModel::new(table(&[("soc", 2)])).unwrap();
        let driver = model.api(ApiIdx::ThermalDriver);

        let err = driver
            .level_to_power(ElementId(0), Level(u32::MAX))
            .unwrap_err();
        assert_eq!(err, DriverError::PowerOverflow {
            label: "soc".into(),
            coeff: 2,
            level: Level(u32::MAX),
        });
    }

    #[test]
    fn should_convert_per_element_with_each_element_coefficient() {
        let model = PowerModel::new(table(&[("big", 3), ("little", 1)])).unwrap();
        let driver = model.api(ApiIdx::ThermalDriver);

        assert_eq!(
            driver.level_to_power(ElementId(0), Level(4)).unwrap(),
            Power(12)
        );
        assert_eq!(
            driver.level_to_power(ElementId(1), Level(4)).unwrap(),
            Power(4)
        );
        assert_eq!(
            driver.power_to_level(ElementId(0), Power(11)).unwrap(),
            Level(3)
        );
    }

    #[test]
    fn should_find_elements_by_label() {
        let model = PowerModel::new(table(&[("big", 3), ("little", 1)])).unwrap();

        assert_eq!(model.element_by_label("little"), Some(ElementId(1)));
        assert_eq!(model.element_by_label("mid"), None);
    }

    #[test]
    fn shared_across_threads_without_locking() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PowerModel>();
    }
}
