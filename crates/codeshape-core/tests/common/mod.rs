use codeshape_core::{Class, Expression, Method, MethodBody, Parameter, Project, Property, TypeRef};

/// Property from a type full name and a member name
#[allow(dead_code)]
pub fn prop(type_name: &str, name: &str) -> Property {
    Property::new(TypeRef::parse(type_name), name)
}

/// Parameter from a type full name and a parameter name
#[allow(dead_code)]
pub fn param(type_name: &str, name: &str) -> Parameter {
    Parameter::new(TypeRef::parse(type_name), name)
}

/// Class with no base type, no interfaces and the given members
#[allow(dead_code)]
pub fn class(full_name: &str, properties: Vec<Property>, methods: Vec<Method>) -> Class {
    let (namespace, name) = full_name.rsplit_once('.').unwrap_or(("", full_name));
    Class::builder(namespace, name)
        .properties(properties)
        .methods(methods)
        .build()
}

/// Public method with a single-statement body
#[allow(dead_code)]
pub fn method(name: &str, body_text: &str) -> Method {
    Method::builder(name)
        .modifier("public")
        .return_type(TypeRef::parse("int"))
        .parameter(param("string", "key"))
        .body(
            MethodBody::builder()
                .body_text(body_text)
                .original_body_text(body_text)
                .build(),
        )
        .build()
}

#[allow(dead_code)]
pub fn project(name: &str, classes: Vec<Class>) -> Project {
    Project::new(name, classes)
}

/// A two-project snapshot exercising every entity kind and wire field
#[allow(dead_code)]
pub fn sample_snapshot() -> Vec<Project> {
    let order = Class::builder("DataTorque.Sales", "Order")
        .base_type(Some(TypeRef::parse("DataTorque.Iho.Entity")))
        .interface_types([
            TypeRef::parse("DataTorque.Iho.IAuditable"),
            TypeRef::parse("System.IDisposable"),
        ])
        .properties([prop("int", "Id"), prop("System.Decimal", "Total")])
        .method(
            Method::builder("Recalculate")
                .modifiers(["public", "virtual"])
                .return_type(TypeRef::void())
                .parameters([param("bool", "force"), param("DataTorque.Sales.Line", "line")])
                .body(
                    MethodBody::builder()
                        .body_text("Total = line.Amount;")
                        .original_body_text("Total = line.Amount; // recalc")
                        .referenced_types([TypeRef::parse("DataTorque.Sales.Line")])
                        .referenced_procedures(["spf_order_total"])
                        .referenced_expressions([Expression::new(
                            TypeRef::parse("DataTorque.Sales.Line"),
                            "Amount",
                        )])
                        .build(),
                )
                .build(),
        )
        .method(Method::builder("Dispose").modifier("public").build())
        .build();

    let line = class("DataTorque.Sales.Line", vec![prop("System.Decimal", "Amount")], vec![]);
    let loose = Class::builder("<global namespace>", "Program").build();

    vec![
        project("Sales", vec![order, line]),
        project("Tools", vec![loose]),
    ]
}
