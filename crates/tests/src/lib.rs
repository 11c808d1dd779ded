//! # Integration Tests
//!
//! Cross-crate tests driving the component the way a host runtime would:
//! registry lookup, validate, construct, read, reconfigure. No real
//! hardware-backed sensor is needed; mocks stand in upstream.

#[cfg(test)]
fn init_tracing() {
    // Only the first test to get here installs the subscriber.
    let _ = observability::init_with_config(observability::ObservabilityConfig {
        log_format: observability::LogFormat::Compact,
        default_log_level: "warn".to_string(),
    });
}

#[cfg(test)]
mod lifecycle_tests {
    use std::sync::Arc;

    use contracts::{ComponentConfig, ComponentError, Dependencies, Registry, Resource, Sensor};
    use distance_calculation::{
        DistanceCalculation, MockOpaqueResource, MockSensor, CENTIMETERS_READING, INCHES_READING,
    };
    use serde_json::Value;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        DistanceCalculation::register(&mut registry);
        registry
    }

    fn config() -> ComponentConfig {
        ComponentConfig::new("calc", DistanceCalculation::MODEL.to_string())
            .with_attribute("sensor", "ultrasonic")
    }

    fn deps_with(resource: Arc<dyn Resource>) -> Dependencies {
        let mut deps = Dependencies::new();
        deps.insert(resource.name().clone(), resource);
        deps
    }

    /// Full host-driven lifecycle: validate collects the implicit
    /// dependency, construct binds it, a read converts its value.
    #[tokio::test]
    async fn test_registry_lifecycle() {
        crate::init_tracing();
        let registry = registry();
        let config = config();

        let implicit = registry.validate(&config).unwrap();
        assert_eq!(implicit, vec!["ultrasonic"]);

        let deps = deps_with(Arc::new(MockSensor::new("ultrasonic", 1.0)));
        let component = registry.construct(&config, &deps).unwrap();
        let sensor = component.as_sensor().expect("component is a sensor");

        let readings = sensor.get_readings(None, None).await.unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(
            readings.get(CENTIMETERS_READING).and_then(Value::as_f64),
            Some(100.0)
        );
        assert_eq!(
            readings.get(INCHES_READING).and_then(Value::as_f64),
            Some(39.37)
        );
    }

    #[test]
    fn test_unknown_model_rejected() {
        let registry = registry();
        let config = ComponentConfig::new("calc", "atacke:distance-calculation:laser")
            .with_attribute("sensor", "ultrasonic");
        let err = registry.validate(&config).unwrap_err();
        assert!(matches!(err, ComponentError::ModelNotFound { .. }));
    }

    #[test]
    fn test_validation_rejects_malformed_config_before_binding() {
        let registry = registry();

        let missing = ComponentConfig::new("calc", DistanceCalculation::MODEL.to_string());
        assert!(matches!(
            registry.validate(&missing).unwrap_err(),
            ComponentError::ConfigValidation { .. }
        ));

        let mistyped = ComponentConfig::new("calc", DistanceCalculation::MODEL.to_string())
            .with_attribute("sensor", 42);
        assert!(matches!(
            registry.validate(&mistyped).unwrap_err(),
            ComponentError::ConfigValidation { .. }
        ));
    }

    #[test]
    fn test_construct_fails_against_wrong_capability() {
        let registry = registry();
        let deps = deps_with(Arc::new(MockOpaqueResource::new("ultrasonic")));
        let err = registry.construct(&config(), &deps).unwrap_err();
        assert!(
            matches!(&err, ComponentError::Binding { dependency, .. } if dependency == "ultrasonic"),
            "got: {err}"
        );
    }

    /// An upstream failure surfaces as an error, never as an empty map.
    #[tokio::test]
    async fn test_upstream_failure_is_never_an_empty_success() {
        let registry = registry();
        let sensor = Arc::new(MockSensor::new("ultrasonic", 1.0));
        let deps = deps_with(Arc::clone(&sensor) as Arc<dyn Resource>);

        let component = registry.construct(&config(), &deps).unwrap();
        let as_sensor = component.as_sensor().unwrap();

        sensor.set_fail_reads(true);
        let result = as_sensor.get_readings(None, None).await;
        assert!(matches!(result, Err(ComponentError::Read { .. })));
    }

    #[tokio::test]
    async fn test_optional_capabilities_always_unsupported() {
        let registry = registry();
        let deps = deps_with(Arc::new(MockSensor::new("ultrasonic", 1.0)));
        let component = registry.construct(&config(), &deps).unwrap();

        let err = component
            .do_command(&Default::default(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ComponentError::Unsupported { .. }));

        let err = component.get_geometries(None, None).await.unwrap_err();
        assert!(matches!(err, ComponentError::Unsupported { .. }));
    }
}

#[cfg(test)]
mod concurrency_tests {
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::Arc;

    use contracts::{ComponentConfig, Dependencies, Resource, Sensor};
    use distance_calculation::{
        DistanceCalculation, MockSensor, CENTIMETERS_READING, INCHES_READING,
        METER_TO_CENTIMETER_MULTIPLE, METER_TO_INCH_MULTIPLE,
    };
    use serde_json::Value;

    const OLD_DISTANCE: f64 = 1.0;
    const NEW_DISTANCE: f64 = 2.0;

    fn config_for(dependency: &str) -> ComponentConfig {
        ComponentConfig::new("calc", DistanceCalculation::MODEL.to_string())
            .with_attribute("sensor", dependency)
    }

    /// Readers racing rebinds must observe one consistent handle per read:
    /// both output entries always derive from the same upstream value.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reads_racing_rebinds_stay_consistent() {
        crate::init_tracing();
        let mut deps = Dependencies::new();
        deps.insert(
            "ultrasonic".into(),
            Arc::new(MockSensor::new("ultrasonic", OLD_DISTANCE)) as Arc<dyn Resource>,
        );
        deps.insert(
            "laser".into(),
            Arc::new(MockSensor::new("laser", NEW_DISTANCE)) as Arc<dyn Resource>,
        );
        let deps = Arc::new(deps);

        let component =
            Arc::new(DistanceCalculation::new(&config_for("ultrasonic"), &deps).unwrap());

        let stop = Arc::new(AtomicBool::new(false));
        let reads = Arc::new(AtomicU64::new(0));

        let mut readers = Vec::new();
        for _ in 0..4 {
            let component = Arc::clone(&component);
            let stop = Arc::clone(&stop);
            let reads = Arc::clone(&reads);
            readers.push(tokio::spawn(async move {
                while !stop.load(Ordering::SeqCst) {
                    let readings = component.get_readings(None, None).await.unwrap();
                    let cm = readings
                        .get(CENTIMETERS_READING)
                        .and_then(Value::as_f64)
                        .unwrap();
                    let inches = readings
                        .get(INCHES_READING)
                        .and_then(Value::as_f64)
                        .unwrap();

                    // Exactly the old pair or the new pair, never a mix.
                    let meters = if cm == OLD_DISTANCE * METER_TO_CENTIMETER_MULTIPLE {
                        OLD_DISTANCE
                    } else if cm == NEW_DISTANCE * METER_TO_CENTIMETER_MULTIPLE {
                        NEW_DISTANCE
                    } else {
                        panic!("centimeters from neither bound sensor: {cm}");
                    };
                    assert_eq!(inches, meters * METER_TO_INCH_MULTIPLE);

                    reads.fetch_add(1, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                }
            }));
        }

        let rebinder = {
            let component = Arc::clone(&component);
            let deps = Arc::clone(&deps);
            tokio::spawn(async move {
                for round in 0..200u32 {
                    let dependency = if round % 2 == 0 { "laser" } else { "ultrasonic" };
                    component
                        .reconfigure(&config_for(dependency), &deps)
                        .unwrap();
                    tokio::task::yield_now().await;
                }
            })
        };

        rebinder.await.unwrap();
        stop.store(true, Ordering::SeqCst);
        for reader in readers {
            reader.await.unwrap();
        }

        assert!(reads.load(Ordering::SeqCst) > 0, "readers never ran");
    }

    /// A failed rebind mid-traffic leaves the old handle serving reads.
    #[tokio::test]
    async fn test_failed_rebind_mid_traffic_keeps_old_binding() {
        let old = Arc::new(MockSensor::new("ultrasonic", OLD_DISTANCE));
        let mut deps = Dependencies::new();
        deps.insert(old.name().clone(), Arc::clone(&old) as Arc<dyn Resource>);

        let component = DistanceCalculation::new(&config_for("ultrasonic"), &deps).unwrap();

        // Host forgot to resolve the new dependency.
        component
            .reconfigure(&config_for("laser"), &Dependencies::new())
            .unwrap_err();

        let readings = component.get_readings(None, None).await.unwrap();
        assert_eq!(
            readings.get(CENTIMETERS_READING).and_then(Value::as_f64),
            Some(OLD_DISTANCE * METER_TO_CENTIMETER_MULTIPLE)
        );
        assert_eq!(old.read_count(), 1);
    }
}
