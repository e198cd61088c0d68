//! Descriptor evaluation
//!
//! A pure, one-shot expansion: every declared input is checked against the
//! resolver, then each platform independently yields exactly one shell
//! definition. Any failure aborts the whole evaluation; no definition is
//! produced.

use crate::definition::{PackageKind, ResolvedPackage, ShellDefinition};
use crate::descriptor::Descriptor;
use crate::error::{Result, ShedError};
use crate::platform::Platform;
use crate::resolver::PackageResolver;

/// Evaluate the descriptor for every declared platform
pub fn evaluate(
    descriptor: &Descriptor,
    resolver: &dyn PackageResolver,
) -> Result<Vec<ShellDefinition>> {
    // Every declared input must be resolvable, even when no package draws
    // from it. Declared once, resolved once per evaluation.
    for input in &descriptor.inputs {
        resolver.lookup_input(input)?;
    }

    descriptor
        .platforms
        .iter()
        .map(|platform| evaluate_platform(descriptor, resolver, *platform))
        .collect()
}

/// Evaluate the descriptor for a single platform
///
/// Platform evaluations are independent of each other: no ordering between
/// platforms, no shared state.
pub fn evaluate_platform(
    descriptor: &Descriptor,
    resolver: &dyn PackageResolver,
    platform: Platform,
) -> Result<ShellDefinition> {
    let input = descriptor.shell_input();
    let shell = &descriptor.shell;

    let mut packages: Vec<ResolvedPackage> = Vec::new();

    let groups = std::iter::once((shell.interpreter.package.as_str(), PackageKind::Interpreter))
        .chain(
            shell
                .interpreter
                .with
                .iter()
                .map(|name| (name.as_str(), PackageKind::Library)),
        )
        .chain(shell.tools.iter().map(|name| (name.as_str(), PackageKind::Tool)));

    for (name, kind) in groups {
        // Validation rejects duplicates in the descriptor; this guards the
        // union when the same artifact enters through different groups.
        if packages.iter().any(|p| p.name == name) {
            continue;
        }

        let artifact = resolver
            .resolve(&input.name, name, platform)?
            .ok_or_else(|| ShedError::UnresolvedPackage {
                name: name.to_string(),
                input: input.name.clone(),
                platform: platform.to_string(),
            })?;

        packages.push(ResolvedPackage {
            name: artifact.name,
            version: artifact.version,
            kind,
            input: input.name.clone(),
            path: artifact.path,
        });
    }

    Ok(ShellDefinition {
        shell: shell.name.clone(),
        platform,
        packages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::descriptor::InputRef;
    use crate::resolver::Artifact;

    /// In-memory fake resolver for evaluation tests
    struct FakeResolver {
        inputs: Vec<String>,
        // (input, package, platform) -> version
        artifacts: HashMap<(String, String, Platform), String>,
    }

    impl FakeResolver {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                artifacts: HashMap::new(),
            }
        }

        fn with_package(mut self, input: &str, package: &str, platform: Platform, version: &str) -> Self {
            self.artifacts.insert(
                (input.to_string(), package.to_string(), platform),
                version.to_string(),
            );
            self
        }
    }

    impl PackageResolver for FakeResolver {
        fn lookup_input(&self, input: &InputRef) -> Result<()> {
            if self.inputs.contains(&input.name) {
                Ok(())
            } else {
                Err(ShedError::UnresolvedInput {
                    name: input.name.clone(),
                    locator: input.locator(),
                })
            }
        }

        fn resolve(
            &self,
            input: &str,
            package: &str,
            platform: Platform,
        ) -> Result<Option<Artifact>> {
            Ok(self
                .artifacts
                .get(&(input.to_string(), package.to_string(), platform))
                .map(|version| Artifact {
                    name: package.to_string(),
                    version: version.clone(),
                    path: None,
                }))
        }
    }

    fn descriptor() -> Descriptor {
        Descriptor::from_yaml(
            r#"
inputs:
  - name: pkgs
    source: github:NixOS/nixpkgs
    channel: nixos-24.05
  - name: extras
    source: github:shed-index/extras
    channel: main
platforms:
  - x86_64-linux
shell:
  interpreter:
    package: python3
    with:
      - reportlab
      - pygments
  tools:
    - clang
    - cmake
"#,
        )
        .unwrap()
    }

    fn full_resolver() -> FakeResolver {
        FakeResolver::new(&["pkgs", "extras"])
            .with_package("pkgs", "python3", Platform::X86_64Linux, "3.12.4")
            .with_package("pkgs", "reportlab", Platform::X86_64Linux, "4.2.0")
            .with_package("pkgs", "pygments", Platform::X86_64Linux, "2.18.0")
            .with_package("pkgs", "clang", Platform::X86_64Linux, "18.1.5")
            .with_package("pkgs", "cmake", Platform::X86_64Linux, "3.29.2")
    }

    #[test]
    fn test_one_definition_per_platform() {
        let definitions = evaluate(&descriptor(), &full_resolver()).unwrap();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].platform, Platform::X86_64Linux);
        assert_eq!(definitions[0].shell, "default");
    }

    #[test]
    fn test_definition_contains_exactly_declared_packages() {
        let definitions = evaluate(&descriptor(), &full_resolver()).unwrap();
        assert_eq!(
            definitions[0].package_names(),
            vec!["python3", "reportlab", "pygments", "clang", "cmake"]
        );
    }

    #[test]
    fn test_package_kinds_follow_groups() {
        let definitions = evaluate(&descriptor(), &full_resolver()).unwrap();
        let kinds: Vec<_> = definitions[0].packages.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PackageKind::Interpreter,
                PackageKind::Library,
                PackageKind::Library,
                PackageKind::Tool,
                PackageKind::Tool,
            ]
        );
    }

    #[test]
    fn test_missing_input_fails_before_resolution() {
        // Resolver knows packages but not the 'extras' input
        let resolver = FakeResolver::new(&["pkgs"])
            .with_package("pkgs", "python3", Platform::X86_64Linux, "3.12.4");

        let result = evaluate(&descriptor(), &resolver);
        match result {
            Err(ShedError::UnresolvedInput { name, .. }) => assert_eq!(name, "extras"),
            other => panic!("Expected UnresolvedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_package_fails() {
        let resolver = FakeResolver::new(&["pkgs", "extras"])
            .with_package("pkgs", "python3", Platform::X86_64Linux, "3.12.4");

        let result = evaluate(&descriptor(), &resolver);
        match result {
            Err(ShedError::UnresolvedPackage {
                name,
                input,
                platform,
            }) => {
                assert_eq!(name, "reportlab");
                assert_eq!(input, "pkgs");
                assert_eq!(platform, "x86_64-linux");
            }
            other => panic!("Expected UnresolvedPackage, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_produces_no_definitions() {
        let resolver = FakeResolver::new(&["pkgs", "extras"]);
        assert!(evaluate(&descriptor(), &resolver).is_err());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let first = evaluate(&descriptor(), &full_resolver()).unwrap();
        let second = evaluate(&descriptor(), &full_resolver()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first[0].digest().unwrap(),
            second[0].digest().unwrap()
        );
    }

    #[test]
    fn test_multi_platform_independent_definitions() {
        let mut descriptor = descriptor();
        descriptor.platforms.push(Platform::Aarch64Darwin);

        let resolver = full_resolver()
            .with_package("pkgs", "python3", Platform::Aarch64Darwin, "3.12.4")
            .with_package("pkgs", "reportlab", Platform::Aarch64Darwin, "4.2.0")
            .with_package("pkgs", "pygments", Platform::Aarch64Darwin, "2.18.0")
            .with_package("pkgs", "clang", Platform::Aarch64Darwin, "18.1.5")
            .with_package("pkgs", "cmake", Platform::Aarch64Darwin, "3.29.2");

        let definitions = evaluate(&descriptor, &resolver).unwrap();
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].platform, Platform::X86_64Linux);
        assert_eq!(definitions[1].platform, Platform::Aarch64Darwin);
    }

    #[test]
    fn test_repeated_package_across_groups_keeps_first_occurrence() {
        // Validation rejects duplicates in a parsed descriptor, so build the
        // overlap directly: a tool repeating one of the bundled libraries.
        let mut desc = descriptor();
        desc.shell.tools = vec!["pygments".to_string(), "cmake".to_string()];

        let definitions = evaluate(&desc, &full_resolver()).unwrap();
        assert_eq!(
            definitions[0].package_names(),
            vec!["python3", "reportlab", "pygments", "cmake"]
        );

        let pygments = definitions[0]
            .packages
            .iter()
            .find(|p| p.name == "pygments")
            .unwrap();
        assert_eq!(pygments.kind, PackageKind::Library);
    }

    #[test]
    fn test_bound_input_used_for_resolution() {
        let mut desc = descriptor();
        desc.shell.from = Some("extras".to_string());

        let resolver = FakeResolver::new(&["pkgs", "extras"])
            .with_package("extras", "python3", Platform::X86_64Linux, "3.12.4")
            .with_package("extras", "reportlab", Platform::X86_64Linux, "4.2.0")
            .with_package("extras", "pygments", Platform::X86_64Linux, "2.18.0")
            .with_package("extras", "clang", Platform::X86_64Linux, "18.1.5")
            .with_package("extras", "cmake", Platform::X86_64Linux, "3.29.2");

        let definitions = evaluate(&desc, &resolver).unwrap();
        assert!(definitions[0].packages.iter().all(|p| p.input == "extras"));
    }
}
