//! Emission of one Angular wrapper component source file.
//!
//! The file is assembled from small fragment functions in a fixed order:
//! header, imports, type import, decorator, class body, lifecycle wiring,
//! property synchronization, event bridging. Each fragment branches only on
//! the presence of members and events, so a component with neither emits just
//! the element capture and nothing else.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use cemwrap_core::{FileRules, GeneratedFile};
use cemwrap_manifest::{ComponentEvent, ComponentMember, ComponentMeta};

use crate::{
    GeneratorConfig,
    ast::{DocBlock, Import},
    builtins::collect_custom_type_tokens,
};

const ANGULAR_CORE: &str = "@angular/core";

/// Symbols required by every wrapper: view query, element handle, decorator
/// metadata and the attach-time lifecycle hook.
const BASE_IMPORTS: &[&str] = &[
    "AfterViewInit",
    "ChangeDetectionStrategy",
    "Component",
    "ElementRef",
    "ViewChild",
];

/// Added only when the component has settable properties.
const MEMBER_IMPORTS: &[&str] = &["Input", "OnChanges"];

/// Added only when the component dispatches events.
const EVENT_IMPORTS: &[&str] = &["EventEmitter", "NgZone", "OnDestroy", "Output"];

/// Schema relaxation for unknown elements, standalone components only.
const SCHEMA_IMPORT: &str = "CUSTOM_ELEMENTS_SCHEMA";

/// A single generated wrapper component file.
pub struct ComponentFile<'a> {
    meta: &'a ComponentMeta,
    config: &'a GeneratorConfig,
}

impl<'a> ComponentFile<'a> {
    pub fn new(meta: &'a ComponentMeta, config: &'a GeneratorConfig) -> Self {
        Self { meta, config }
    }

    fn header(&self) -> String {
        let mut block = DocBlock::new();
        block = match self
            .meta
            .description
            .as_deref()
            .map(str::trim)
            .filter(|description| !description.is_empty())
        {
            Some(description) => block.text(description),
            None => block.line(format!(
                "Auto-generated wrapper for the `{}` custom element.",
                self.meta.tag_name
            )),
        };
        let source_module = self.meta.source_module.as_deref().unwrap_or("n/a");
        block
            .blank()
            .line(format!("Source module: {source_module}"))
            .blank()
            .line("Generated file. Do not edit directly.")
            .build()
    }

    fn framework_import(&self) -> String {
        let mut symbols: BTreeSet<&str> = BASE_IMPORTS.iter().copied().collect();
        if self.meta.has_members() {
            symbols.extend(MEMBER_IMPORTS);
        }
        if self.meta.has_events() {
            symbols.extend(EVENT_IMPORTS);
        }
        if self.config.standalone {
            symbols.insert(SCHEMA_IMPORT);
        }
        Import::new(ANGULAR_CORE).named_all(symbols).build()
    }

    fn type_import(&self, custom_types: &BTreeSet<String>) -> String {
        Import::new(self.config.library_import.clone())
            .named_all(custom_types.iter().cloned())
            .type_only()
            .build()
    }

    fn decorator(&self) -> String {
        let tag = &self.meta.tag_name;
        let mut lines = vec![
            "@Component({".to_string(),
            format!("  selector: '{}',", self.meta.selector),
            format!("  template: `<{tag} #element><ng-content></ng-content></{tag}>`,"),
            "  changeDetection: ChangeDetectionStrategy.OnPush,".to_string(),
            format!("  standalone: {},", self.config.standalone),
        ];
        if self.config.standalone {
            lines.push(format!("  schemas: [{SCHEMA_IMPORT}],"));
        } else if self.meta.has_members() {
            let names = self
                .meta
                .members
                .iter()
                .map(|member| format!("'{}'", member.name))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("  inputs: [{names}],"));
        }
        lines.push("})".to_string());
        lines.join("\n")
    }

    fn class_declaration(&self) -> String {
        let mut interfaces = vec!["AfterViewInit"];
        if self.meta.has_members() {
            interfaces.push("OnChanges");
        }
        if self.meta.has_events() {
            interfaces.push("OnDestroy");
        }
        format!(
            "export class {} implements {}",
            self.meta.class_name,
            interfaces.join(", ")
        )
    }

    fn member_property(&self, member: &ComponentMember) -> String {
        let mut lines = Vec::new();
        if let Some(description) = doc_line(member.description.as_deref()) {
            lines.push(format!("  /** {description} */"));
        }
        lines.push("  @Input()".to_string());
        let optional = if member.optional { "?" } else { "" };
        lines.push(format!("  {}{optional}: {};", member.name, member.ty));
        lines.join("\n")
    }

    fn output_property(&self, event: &ComponentEvent) -> String {
        let mut lines = Vec::new();
        if let Some(description) = doc_line(event.description.as_deref()) {
            lines.push(format!("  /** {description} */"));
        }
        if event.needs_alias() {
            lines.push(format!("  @Output('{}')", event.event_name));
        } else {
            lines.push("  @Output()".to_string());
        }
        lines.push(format!(
            "  {} = new EventEmitter<{}>();",
            event.output_name, event.ty
        ));
        lines.join("\n")
    }

    fn after_view_init(&self) -> String {
        let mut lines = vec![
            "  ngAfterViewInit(): void {".to_string(),
            "    this.element = this.hostRef.nativeElement;".to_string(),
        ];
        if self.meta.has_events() {
            lines.push("    this.attachEventBridges();".to_string());
        }
        if self.meta.has_members() {
            lines.push("    this.pushProperties();".to_string());
        }
        lines.push("  }".to_string());
        lines.join("\n")
    }

    fn on_changes(&self) -> String {
        ["  ngOnChanges(): void {", "    this.pushProperties();", "  }"].join("\n")
    }

    fn on_destroy(&self) -> String {
        [
            "  ngOnDestroy(): void {",
            "    for (const cleanup of this.listenerCleanups) {",
            "      cleanup();",
            "    }",
            "    this.listenerCleanups = [];",
            "  }",
        ]
        .join("\n")
    }

    fn push_properties(&self) -> String {
        let mut lines = vec![
            "  private pushProperties(): void {".to_string(),
            "    if (!this.element) {".to_string(),
            "      return;".to_string(),
            "    }".to_string(),
            "    const element = this.element as unknown as { [key: string]: unknown };".to_string(),
        ];
        for member in &self.meta.members {
            lines.push(format!("    element['{0}'] = this.{0};", member.name));
        }
        lines.push("  }".to_string());
        lines.join("\n")
    }

    fn attach_event_bridges(&self) -> String {
        let mut lines = vec![
            "  private attachEventBridges(): void {".to_string(),
            "    if (!this.element) {".to_string(),
            "      return;".to_string(),
            "    }".to_string(),
            "    const element = this.element;".to_string(),
        ];
        for event in &self.meta.events {
            let handler = handler_name(&event.output_name);
            lines.push(format!("    const {handler} = (event: Event) => {{"));
            lines.push(format!(
                "      this.zone.run(() => this.{}.emit(event as {}));",
                event.output_name, event.ty
            ));
            lines.push("    };".to_string());
            lines.push(format!(
                "    element.addEventListener('{}', {handler});",
                event.event_name
            ));
            lines.push(format!(
                "    this.listenerCleanups.push(() => element.removeEventListener('{}', {handler}));",
                event.event_name
            ));
        }
        lines.push("  }".to_string());
        lines.join("\n")
    }

    fn class_body(&self) -> String {
        let mut items: Vec<String> = vec![
            "  @ViewChild('element', { static: true })\n  private hostRef!: ElementRef<HTMLElement>;"
                .to_string(),
            "  private element?: HTMLElement;".to_string(),
        ];
        for member in &self.meta.members {
            items.push(self.member_property(member));
        }
        for event in &self.meta.events {
            items.push(self.output_property(event));
        }
        if self.meta.has_events() {
            items.push("  private listenerCleanups: Array<() => void> = [];".to_string());
            items.push("  constructor(private zone: NgZone) {}".to_string());
        }
        items.push(self.after_view_init());
        if self.meta.has_members() {
            items.push(self.on_changes());
        }
        if self.meta.has_events() {
            items.push(self.on_destroy());
        }
        if self.meta.has_members() {
            items.push(self.push_properties());
        }
        if self.meta.has_events() {
            items.push(self.attach_event_bridges());
        }
        items.join("\n\n")
    }
}

impl GeneratedFile for ComponentFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.meta.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let custom_types = collect_custom_type_tokens(self.meta);

        let mut out = String::new();
        out.push_str(&self.header());
        out.push('\n');
        out.push_str(&self.framework_import());
        out.push('\n');
        if !custom_types.is_empty() {
            out.push_str(&self.type_import(&custom_types));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.decorator());
        out.push('\n');
        out.push_str(&self.class_declaration());
        out.push_str(" {\n");
        out.push_str(&self.class_body());
        out.push_str("\n}\n");
        out
    }
}

/// Collapse a description to a single documentation line; blank means none.
fn doc_line(description: Option<&str>) -> Option<String> {
    let description = description?.trim();
    if description.is_empty() {
        return None;
    }
    Some(
        description
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Local handler constant for an event listener, e.g. "onButtonClick".
fn handler_name(output_name: &str) -> String {
    let mut chars = output_name.chars();
    match chars.next() {
        None => "onEvent".to_string(),
        Some(first) => format!("on{}{}", first.to_ascii_uppercase(), chars.as_str()),
    }
}
