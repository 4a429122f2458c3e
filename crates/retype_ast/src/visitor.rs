//! AST visitor trait for traversing the syntax tree.
//!
//! Default implementations walk into every child. The matches are
//! exhaustive, so adding a node shape forces every traversal to handle it.

use crate::node::*;

/// A visitor that traverses the AST. Override the methods for the nodes you
/// care about; default implementations walk into children.
pub trait AstVisitor<'a> {
    fn visit_program(&mut self, program: &Program<'a>) {
        for item in program.items {
            self.visit_module_item(item);
        }
    }

    fn visit_module_item(&mut self, item: &ModuleItem<'a>) {
        match item {
            ModuleItem::Statement(stmt) => self.visit_statement(stmt),
            ModuleItem::Import(import) => self.visit_import_declaration(import),
            ModuleItem::Export(export) => self.visit_export_declaration(export),
        }
    }

    fn visit_identifier(&mut self, _id: &'a Identifier<'a>) {}

    // -- Modules --

    fn visit_import_declaration(&mut self, node: &ImportDeclaration<'a>) {
        if let Some(id) = node.default_binding {
            self.visit_identifier(id);
        }
        if let Some(id) = node.namespace_binding {
            self.visit_identifier(id);
        }
        for spec in node.named_bindings {
            self.visit_identifier(spec.imported);
            self.visit_identifier(spec.local);
        }
    }

    fn visit_export_declaration(&mut self, node: &ExportDeclaration<'a>) {
        match node {
            ExportDeclaration::Declaration(decl) => self.visit_declaration(decl),
            ExportDeclaration::Variable(var) => self.visit_variable_statement(var),
            ExportDeclaration::Named(named) => {
                for spec in named.specifiers {
                    self.visit_identifier(spec.local);
                    self.visit_identifier(spec.exported);
                }
            }
            ExportDeclaration::All(_) => {}
            ExportDeclaration::Default(expr) => self.visit_expression(expr),
        }
    }

    // -- Statements --

    fn visit_statement(&mut self, stmt: &Statement<'a>) {
        match stmt {
            Statement::Block(stmts) => self.visit_statements(stmts),
            Statement::Variable(var) => self.visit_variable_statement(var),
            Statement::Empty | Statement::Debugger => {}
            Statement::Expression(expr) => self.visit_expression(expr),
            Statement::If(node) => {
                self.visit_expression(&node.condition);
                self.visit_statement(&node.then_statement);
                if let Some(else_stmt) = &node.else_statement {
                    self.visit_statement(else_stmt);
                }
            }
            Statement::DoWhile(node) => {
                self.visit_statement(&node.body);
                self.visit_expression(&node.condition);
            }
            Statement::While(node) => {
                self.visit_expression(&node.condition);
                self.visit_statement(&node.body);
            }
            Statement::For(node) => {
                match &node.initializer {
                    Some(ForInitializer::Variable(var)) => self.visit_variable_statement(var),
                    Some(ForInitializer::Expression(expr)) => self.visit_expression(expr),
                    None => {}
                }
                if let Some(cond) = &node.condition {
                    self.visit_expression(cond);
                }
                if let Some(inc) = &node.incrementor {
                    self.visit_expression(inc);
                }
                self.visit_statement(&node.body);
            }
            Statement::ForIn(node) | Statement::ForOf(node) => {
                match &node.binding {
                    ForBinding::Variable { binding, .. } => self.visit_binding_pattern(binding),
                    ForBinding::Expression(expr) => self.visit_expression(expr),
                }
                self.visit_expression(&node.expression);
                self.visit_statement(&node.body);
            }
            Statement::Continue(label) | Statement::Break(label) => {
                if let Some(label) = *label {
                    self.visit_identifier(label);
                }
            }
            Statement::Return(expr) => {
                if let Some(expr) = expr {
                    self.visit_expression(expr);
                }
            }
            Statement::With(node) => {
                self.visit_expression(&node.object);
                self.visit_statement(&node.body);
            }
            Statement::Switch(node) => {
                self.visit_expression(&node.discriminant);
                for clause in node.clauses {
                    if let Some(test) = &clause.test {
                        self.visit_expression(test);
                    }
                    self.visit_statements(clause.statements);
                }
            }
            Statement::Labeled(node) => {
                self.visit_identifier(node.label);
                self.visit_statement(&node.body);
            }
            Statement::Throw(expr) => self.visit_expression(expr),
            Statement::Try(node) => {
                self.visit_statements(node.block);
                if let Some(catch) = &node.catch_clause {
                    if let Some(param) = &catch.parameter {
                        self.visit_binding_pattern(param);
                    }
                    self.visit_statements(catch.block);
                }
                if let Some(finally) = node.finally_block {
                    self.visit_statements(finally);
                }
            }
            Statement::Declaration(decl) => self.visit_declaration(decl),
        }
    }

    fn visit_statements(&mut self, stmts: &[Statement<'a>]) {
        for stmt in stmts {
            self.visit_statement(stmt);
        }
    }

    fn visit_variable_statement(&mut self, node: &VariableStatement<'a>) {
        for decl in node.declarations {
            match decl {
                VariableDeclaration::Simple(simple) => {
                    self.visit_identifier(simple.name);
                    if let Some(ty) = &simple.type_annotation {
                        self.visit_type(ty);
                    }
                    if let Some(init) = &simple.initializer {
                        self.visit_expression(init);
                    }
                }
                VariableDeclaration::Destructuring(destructuring) => {
                    self.visit_binding_pattern(&destructuring.pattern);
                    if let Some(ty) = &destructuring.type_annotation {
                        self.visit_type(ty);
                    }
                    self.visit_expression(&destructuring.initializer);
                }
            }
        }
    }

    // -- Declarations --

    fn visit_declaration(&mut self, decl: &Declaration<'a>) {
        match decl {
            Declaration::Function(func) => {
                self.visit_identifier(func.name);
                self.visit_call_signature(&func.signature);
                self.visit_statements(func.body);
            }
            Declaration::Class(class) => self.visit_class(class),
            Declaration::Interface(node) => {
                self.visit_identifier(node.name);
                self.visit_type_parameters(node.type_parameters);
                for reference in node.extends {
                    self.visit_type_reference(reference);
                }
                self.visit_object_type(node.body);
            }
            Declaration::TypeAlias(node) => {
                self.visit_identifier(node.name);
                self.visit_type_parameters(node.type_parameters);
                self.visit_type(&node.type_node);
            }
            Declaration::Enum(node) => {
                self.visit_identifier(node.name);
                for member in node.members {
                    self.visit_property_name(&member.name);
                    if let Some(init) = &member.initializer {
                        self.visit_expression(init);
                    }
                }
            }
        }
    }

    fn visit_class(&mut self, class: &ClassDefinition<'a>) {
        if let Some(name) = class.name {
            self.visit_identifier(name);
        }
        self.visit_type_parameters(class.type_parameters);
        if let Some(heritage) = &class.heritage {
            self.visit_expression(&heritage.expression);
            for arg in heritage.type_arguments {
                self.visit_type(arg);
            }
        }
        for reference in class.implements {
            self.visit_type_reference(reference);
        }
        for member in class.members {
            self.visit_class_member(member);
        }
    }

    fn visit_class_member(&mut self, member: &ClassMember<'a>) {
        match member {
            ClassMember::Constructor(ctor) => {
                self.visit_parameter_list(&ctor.parameters);
                self.visit_statements(ctor.body);
            }
            ClassMember::Method { method, .. } => self.visit_method(method),
            ClassMember::Property(prop) => {
                self.visit_property_name(&prop.name);
                if let Some(ty) = &prop.type_annotation {
                    self.visit_type(ty);
                }
                if let Some(init) = &prop.initializer {
                    self.visit_expression(init);
                }
            }
            ClassMember::GetAccessor { accessor, .. } => self.visit_get_accessor(accessor),
            ClassMember::SetAccessor { accessor, .. } => self.visit_set_accessor(accessor),
            ClassMember::IndexSignature(sig) => self.visit_index_signature(sig),
        }
    }

    fn visit_method(&mut self, method: &MethodDefinition<'a>) {
        self.visit_property_name(&method.name);
        self.visit_call_signature(&method.signature);
        self.visit_statements(method.body);
    }

    fn visit_get_accessor(&mut self, accessor: &GetAccessor<'a>) {
        self.visit_property_name(&accessor.name);
        if let Some(ty) = &accessor.return_type {
            self.visit_type(ty);
        }
        self.visit_statements(accessor.body);
    }

    fn visit_set_accessor(&mut self, accessor: &SetAccessor<'a>) {
        self.visit_property_name(&accessor.name);
        self.visit_required_parameter(&accessor.parameter);
        self.visit_statements(accessor.body);
    }

    // -- Expressions --

    fn visit_expression(&mut self, expr: &Expression<'a>) {
        match expr {
            Expression::This | Expression::Super | Expression::Literal(_) => {}
            Expression::Identifier(id) => self.visit_identifier(id),
            Expression::Template(template) => self.visit_template(template),
            Expression::TaggedTemplate(node) => {
                self.visit_expression(&node.tag);
                self.visit_template(node.template);
            }
            Expression::ArrayLiteral(array) => {
                for element in array.elements {
                    match element {
                        ArrayElement::Elided => {}
                        ArrayElement::Expression(e) | ArrayElement::Spread(e) => {
                            self.visit_expression(e)
                        }
                    }
                }
            }
            Expression::ObjectLiteral(object) => {
                for member in object.members {
                    match member {
                        ObjectMember::Property { name, value } => {
                            self.visit_property_name(name);
                            self.visit_expression(value);
                        }
                        ObjectMember::Shorthand(id) => self.visit_identifier(id),
                        ObjectMember::Method(method) => self.visit_method(method),
                        ObjectMember::GetAccessor(accessor) => self.visit_get_accessor(accessor),
                        ObjectMember::SetAccessor(accessor) => self.visit_set_accessor(accessor),
                    }
                }
            }
            Expression::Function(func) => {
                if let Some(name) = func.name {
                    self.visit_identifier(name);
                }
                self.visit_call_signature(&func.signature);
                self.visit_statements(func.body);
            }
            Expression::Class(class) => self.visit_class(class),
            Expression::Arrow(arrow) => {
                self.visit_call_signature(&arrow.signature);
                match &arrow.body {
                    ArrowFunctionBody::Block(stmts) => self.visit_statements(stmts),
                    ArrowFunctionBody::Expression(e) => self.visit_expression(e),
                }
            }
            Expression::Parenthesized(inner) => self.visit_expression(inner),
            Expression::PropertyAccess(node) => {
                self.visit_expression(&node.expression);
                self.visit_identifier(node.name);
            }
            Expression::ElementAccess(node) => {
                self.visit_expression(&node.expression);
                self.visit_expression(&node.argument);
            }
            Expression::Call(call) => {
                self.visit_expression(&call.expression);
                for ty in call.type_arguments {
                    self.visit_type(ty);
                }
                self.visit_arguments(call.arguments);
            }
            Expression::New(node) => {
                self.visit_expression(&node.expression);
                for ty in node.type_arguments {
                    self.visit_type(ty);
                }
                if let Some(args) = node.arguments {
                    self.visit_arguments(args);
                }
            }
            Expression::Unary(node) => self.visit_expression(&node.operand),
            Expression::Update(node) => self.visit_expression(&node.operand),
            Expression::Binary(node) => {
                self.visit_expression(&node.left);
                self.visit_expression(&node.right);
            }
            Expression::Assignment(node) => {
                self.visit_expression(&node.target);
                self.visit_expression(&node.value);
            }
            Expression::Conditional(node) => {
                self.visit_expression(&node.condition);
                self.visit_expression(&node.when_true);
                self.visit_expression(&node.when_false);
            }
            Expression::Sequence(exprs) => {
                for e in *exprs {
                    self.visit_expression(e);
                }
            }
            Expression::Yield(node) => {
                if let Some(arg) = &node.argument {
                    self.visit_expression(arg);
                }
            }
            Expression::TypeAssertion(node) | Expression::As(node) => {
                self.visit_type(&node.type_node);
                self.visit_expression(&node.expression);
            }
        }
    }

    fn visit_arguments(&mut self, args: &[Argument<'a>]) {
        for arg in args {
            match arg {
                Argument::Expression(e) | Argument::Spread(e) => self.visit_expression(e),
            }
        }
    }

    fn visit_template(&mut self, template: &TemplateLiteral<'a>) {
        for span in template.spans {
            self.visit_expression(&span.expression);
        }
    }

    fn visit_property_name(&mut self, name: &PropertyName<'a>) {
        match name {
            PropertyName::Identifier(id) => self.visit_identifier(id),
            PropertyName::StringLiteral(_) | PropertyName::NumericLiteral(_) => {}
            PropertyName::Computed(expr) => self.visit_expression(expr),
        }
    }

    // -- Parameters and bindings --

    fn visit_call_signature(&mut self, sig: &CallSignature<'a>) {
        self.visit_type_parameters(sig.type_parameters);
        self.visit_parameter_list(&sig.parameters);
        if let Some(ret) = &sig.return_type {
            self.visit_type(ret);
        }
    }

    fn visit_parameter_list(&mut self, params: &ParameterList<'a>) {
        for param in params.required {
            self.visit_required_parameter(param);
        }
        for param in params.optional {
            self.visit_binding_pattern(&param.binding);
            if let Some(ty) = &param.type_annotation {
                self.visit_type(ty);
            }
            if let Some(init) = &param.initializer {
                self.visit_expression(init);
            }
        }
        if let Some(rest) = params.rest {
            self.visit_identifier(rest.name);
            if let Some(ty) = &rest.type_annotation {
                self.visit_type(ty);
            }
        }
    }

    fn visit_required_parameter(&mut self, param: &RequiredParameter<'a>) {
        match param {
            RequiredParameter::Binding(p) => {
                self.visit_binding_pattern(&p.binding);
                if let Some(ty) = &p.type_annotation {
                    self.visit_type(ty);
                }
            }
            RequiredParameter::StringLiteral(p) => self.visit_identifier(p.name),
        }
    }

    fn visit_binding_pattern(&mut self, pattern: &BindingPattern<'a>) {
        match pattern {
            BindingPattern::Identifier(id) => self.visit_identifier(id),
            BindingPattern::Object(object) => {
                for prop in object.properties {
                    match prop {
                        BindingProperty::Shorthand { name, initializer } => {
                            self.visit_identifier(name);
                            if let Some(init) = initializer {
                                self.visit_expression(init);
                            }
                        }
                        BindingProperty::Remapped {
                            key,
                            binding,
                            initializer,
                        } => {
                            self.visit_property_name(key);
                            self.visit_binding_pattern(binding);
                            if let Some(init) = initializer {
                                self.visit_expression(init);
                            }
                        }
                    }
                }
            }
            BindingPattern::Array(array) => {
                for element in array.elements {
                    match element {
                        ArrayBindingElement::Elided => {}
                        ArrayBindingElement::Element {
                            binding,
                            initializer,
                        } => {
                            self.visit_binding_pattern(binding);
                            if let Some(init) = initializer {
                                self.visit_expression(init);
                            }
                        }
                    }
                }
                if let Some(rest) = array.rest {
                    self.visit_identifier(rest);
                }
            }
        }
    }

    // -- Types --

    fn visit_type(&mut self, ty: &TypeNode<'a>) {
        match ty {
            TypeNode::Predefined(_) | TypeNode::ThisType => {}
            TypeNode::TypeReference(reference) => self.visit_type_reference(reference),
            TypeNode::TypeQuery(name) => {
                for id in name.parts() {
                    self.visit_identifier(id);
                }
            }
            TypeNode::ObjectType(object) => self.visit_object_type(object),
            TypeNode::ArrayType(element) => self.visit_type(element),
            TypeNode::TupleType(elements) => {
                for element in *elements {
                    self.visit_type(element);
                }
            }
            TypeNode::FunctionType(func) | TypeNode::ConstructorType(func) => {
                self.visit_type_parameters(func.type_parameters);
                self.visit_parameter_list(&func.parameters);
                self.visit_type(&func.return_type);
            }
            TypeNode::UnionType(pair) | TypeNode::IntersectionType(pair) => {
                self.visit_type(&pair.left);
                self.visit_type(&pair.right);
            }
            TypeNode::ParenthesizedType(inner) => self.visit_type(inner),
        }
    }

    fn visit_type_reference(&mut self, reference: &TypeReference<'a>) {
        for id in reference.name.parts() {
            self.visit_identifier(id);
        }
        for arg in reference.type_arguments {
            self.visit_type(arg);
        }
    }

    fn visit_type_parameters(&mut self, params: &[TypeParameter<'a>]) {
        for param in params {
            self.visit_identifier(param.name);
            if let Some(constraint) = &param.constraint {
                self.visit_type(constraint);
            }
        }
    }

    fn visit_object_type(&mut self, object: &ObjectType<'a>) {
        for member in object.members {
            match member {
                TypeMember::Property(prop) => {
                    self.visit_property_name(&prop.name);
                    if let Some(ty) = &prop.type_annotation {
                        self.visit_type(ty);
                    }
                }
                TypeMember::Method(method) => {
                    self.visit_property_name(&method.name);
                    self.visit_call_signature(&method.signature);
                }
                TypeMember::CallSignature(sig) | TypeMember::ConstructSignature(sig) => {
                    self.visit_call_signature(sig)
                }
                TypeMember::IndexSignature(sig) => self.visit_index_signature(sig),
            }
        }
    }

    fn visit_index_signature(&mut self, sig: &IndexSignature<'a>) {
        self.visit_identifier(sig.parameter);
        self.visit_type(&sig.key_type);
        self.visit_type(&sig.type_annotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::NodeFactory;
    use bumpalo::Bump;

    struct IdentifierCollector {
        names: Vec<String>,
    }

    impl<'a> AstVisitor<'a> for IdentifierCollector {
        fn visit_identifier(&mut self, id: &'a Identifier<'a>) {
            self.names.push(id.text().to_string());
        }
    }

    #[test]
    fn test_walks_into_children() {
        let arena = Bump::new();
        let f = NodeFactory::new(&arena);
        // let x: T = a + b;
        let ty_name = f.qualified_name(vec![], f.identifier("T"));
        let ty = f.type_reference_node(f.type_reference(ty_name, vec![]));
        let sum = f.binary(
            f.identifier_expression(f.identifier("a")),
            BinaryOperator::Add,
            f.identifier_expression(f.identifier("b")),
        );
        let decl = f.simple_declaration(f.identifier("x"), Some(ty), Some(sum));
        let stmt = f.variable(f.variable_statement(VariableKind::Let, vec![decl]));
        let program = f.program(vec![f.statement_item(stmt)], false);

        let mut collector = IdentifierCollector { names: vec![] };
        collector.visit_program(program);
        assert_eq!(collector.names, ["x", "T", "a", "b"]);
    }
}
