//! Container flattening shared by every pod-template-shaped kind.

use crate::k8s::object::{ContainerSpec, PodSpec};

/// Extract all containers from a PodSpec (containers + init containers).
pub fn all_containers(pod_spec: &PodSpec) -> Vec<&ContainerSpec> {
    let mut containers: Vec<&ContainerSpec> = pod_spec.containers.iter().collect();
    containers.extend(pod_spec.init_containers.iter());
    containers
}

/// Flatten any number of pod specs into one ordered image list.
///
/// Each spec contributes its primary containers followed by its init
/// containers; specs are visited in iteration order and `None` entries
/// contribute nothing.
pub fn flatten_images<'a, I>(pod_specs: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a PodSpec>>,
{
    pod_specs
        .into_iter()
        .flatten()
        .flat_map(all_containers)
        .map(|c| c.image.clone())
        .collect()
}

/// Images referenced through environment variables of the primary containers.
///
/// A variable qualifies when its name contains `image` in any case and it has
/// a literal value.
pub fn env_images(pod_spec: &PodSpec) -> Vec<String> {
    pod_spec
        .containers
        .iter()
        .flat_map(|c| c.env.iter())
        .filter(|ev| ev.name.to_lowercase().contains("image"))
        .filter_map(|ev| ev.value.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s::object::EnvVar;

    fn container(image: &str) -> ContainerSpec {
        ContainerSpec {
            name: String::new(),
            image: image.to_string(),
            env: Vec::new(),
        }
    }

    fn pod(containers: &[&str], init: &[&str]) -> PodSpec {
        PodSpec {
            containers: containers.iter().map(|i| container(i)).collect(),
            init_containers: init.iter().map(|i| container(i)).collect(),
        }
    }

    #[test]
    fn test_primary_before_init() {
        let spec = pod(&["a", "b"], &["c"]);
        assert_eq!(flatten_images([Some(&spec)]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_multiple_templates_keep_pairing() {
        let first = pod(&["a"], &["a-init"]);
        let second = pod(&["b"], &["b-init"]);
        assert_eq!(
            flatten_images([Some(&first), None, Some(&second)]),
            vec!["a", "a-init", "b", "b-init"]
        );
    }

    #[test]
    fn test_no_specs_is_empty_not_missing() {
        let images = flatten_images(std::iter::empty());
        assert!(images.is_empty());
    }

    #[test]
    fn test_env_images_filters_by_name() {
        let mut spec = pod(&["app"], &[]);
        spec.containers[0].env = vec![
            EnvVar {
                name: "SIDECAR_Image".to_string(),
                value: Some("envoy:1.28".to_string()),
            },
            EnvVar {
                name: "LOG_LEVEL".to_string(),
                value: Some("info".to_string()),
            },
            EnvVar {
                name: "IMAGE_FROM_SECRET".to_string(),
                value: None,
            },
        ];
        assert_eq!(env_images(&spec), vec!["envoy:1.28"]);
    }

    #[test]
    fn test_env_images_ignores_init_containers() {
        let mut spec = pod(&[], &["init"]);
        spec.init_containers[0].env = vec![EnvVar {
            name: "IMAGE".to_string(),
            value: Some("hidden:1".to_string()),
        }];
        assert!(env_images(&spec).is_empty());
    }
}
