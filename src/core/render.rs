//! C rendering of a planned [`RteUnit`].

use crate::core::emit::{Accessor, AccessorKind, RteUnit};

/// Header comment, includes and every buffer declaration.
pub fn render_declarations(unit: &RteUnit) -> String {
    let mut lines = vec![
        format!("/* Auto-generated RTE file for component: {} */", unit.component),
        format!("#include \"{}\"", unit.runtime_header),
        format!("#include \"{}\"", unit.component_header()),
        String::new(),
        "/* =============================================================================".to_string(),
        " * RTE INTERNAL BUFFERS (Global scope for macro access)".to_string(),
        " * =============================================================================*/".to_string(),
        String::new(),
    ];

    for buffer in &unit.receive_buffers {
        lines.push(format!("extern {} {};", buffer.c_type, buffer.name));
    }
    lines.push(String::new());

    lines.push("/* Output buffers - written by this SWC */".to_string());
    for buffer in &unit.provide_buffers {
        let init = buffer.initializer.as_deref().unwrap_or("0");
        lines.push(format!("{} {} = {};", buffer.c_type, buffer.name, init));
    }
    lines.push(String::new());

    lines.join("\n")
}

/// One function block per accessor.
pub fn render_functions(unit: &RteUnit) -> String {
    let mut lines = vec![
        String::new(),
        "/* RTE API implementations */".to_string(),
        String::new(),
    ];
    for accessor in &unit.accessors {
        render_accessor(accessor, &mut lines);
        lines.push(String::new());
    }
    lines.join("\n")
}

fn render_accessor(accessor: &Accessor, lines: &mut Vec<String>) {
    match accessor.kind {
        AccessorKind::Read => {
            lines.push(format!(
                "Std_ReturnType {}({}* data){{",
                accessor.name, accessor.c_type
            ));
            lines.push("    if (data == NULL) {".to_string());
            lines.push("        return RTE_E_LIMIT;  // Invalid pointer".to_string());
            lines.push("    }".to_string());
            lines.push(format!("    *data = {};", accessor.buffer));
        }
        AccessorKind::Write => {
            lines.push(format!(
                "Std_ReturnType {}({} data){{",
                accessor.name, accessor.c_type
            ));
            lines.push(format!("    {} = data;", accessor.buffer));
        }
    }
    lines.push("    return RTE_E_OK;".to_string());
    lines.push("}".to_string());
}

/// The complete generated file: declarations, a blank separator, functions.
pub fn render(unit: &RteUnit) -> String {
    format!("{}\n{}", render_declarations(unit), render_functions(unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emit::{plan, DEFAULT_RUNTIME_HEADER};
    use crate::core::extract::extract_component;
    use crate::domain::ports::GenerationPolicy;
    use serde_json::json;

    const SPEED_C: &str = r#"/* Auto-generated RTE file for component: SpeedCtrl */
#include "include/Rte.h"
#include "Rte_SpeedCtrl.h"

/* =============================================================================
 * RTE INTERNAL BUFFERS (Global scope for macro access)
 * =============================================================================*/

extern Double Rte_Buffer_InSpeed_value;

/* Output buffers - written by this SWC */
Double Rte_Buffer_OutSpeed_value = 0.0;


/* RTE API implementations */

Std_ReturnType Rte_Read_InSpeed_value(Double* data){
    if (data == NULL) {
        return RTE_E_LIMIT;  // Invalid pointer
    }
    *data = Rte_Buffer_InSpeed_value;
    return RTE_E_OK;
}

Std_ReturnType Rte_Write_OutSpeed_value(Double data){
    Rte_Buffer_OutSpeed_value = data;
    return RTE_E_OK;
}
"#;

    fn speed_unit() -> RteUnit {
        let doc = json!({"Component": {
            "name": "SpeedCtrl",
            "Interfaces": [{"name": "Speed", "dataElements": [{"name": "value", "type": "double"}]}],
            "Ports": [
                {"name": "InSpeed", "type": "RPORT", "interface": "Speed"},
                {"name": "OutSpeed", "type": "PPORT", "interface": "Speed"}
            ]
        }});
        let extraction = extract_component(&doc).unwrap();
        plan(
            "SpeedCtrl",
            DEFAULT_RUNTIME_HEADER,
            &extraction.component,
            GenerationPolicy::Strict,
        )
        .unwrap()
    }

    #[test]
    fn test_render_speed_component() {
        assert_eq!(render(&speed_unit()), SPEED_C);
    }

    #[test]
    fn test_render_is_deterministic() {
        let unit = speed_unit();
        assert_eq!(render(&unit), render(&unit.clone()));
    }

    #[test]
    fn test_empty_unit_keeps_section_skeleton() {
        let unit = RteUnit {
            component: "Idle".to_string(),
            runtime_header: "rte/Rte.h".to_string(),
            receive_buffers: vec![],
            provide_buffers: vec![],
            accessors: vec![],
            absorbed_gaps: 0,
        };
        let text = render(&unit);
        assert!(text.starts_with("/* Auto-generated RTE file for component: Idle */\n#include \"rte/Rte.h\"\n#include \"Rte_Idle.h\"\n"));
        assert!(text.ends_with("/* RTE API implementations */\n"));
        assert!(!text.contains("Std_ReturnType"));
    }
}
