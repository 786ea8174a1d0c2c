//! Method lowering: request senders, event handlers, the dispatcher and the id accessor.

use wlcpp_protocol::{Argument, Interface, Message};

use super::InterfaceLowering;
use super::decl::{ID_MEMBER, SOCKET_MEMBER, argument_parameters};
use super::names::{callback_member_name, opcode_name, parsed_local_name};
use super::types::{AUTO, BUFFER_PARSER, OBJECT_BUILDER, VOID, WIRE_OP, argument_types};
use crate::backend::cpp::{
    DeclSpecifierSeq, Declarator, Expr, Function, InitDeclarator, Initializer, Parameter, ParameterList,
    SimpleDeclaration, Specifier, Statement,
};

const BUILDER: &str = "builder";
const DISPATCH: &str = "dispatch";
const OPCODE_PARAM: &str = "op";
const BODY_PARAM: &str = "body";

impl InterfaceLowering<'_> {
    /// `void <request>(args) { builder; [builder.add(args);] sock.write(...); }`
    pub(super) fn request_method(&self, request: &Message) -> Function {
        let builder = SimpleDeclaration::new(
            DeclSpecifierSeq::of_type(OBJECT_BUILDER.clone()),
            InitDeclarator::new(Declarator::id(BUILDER)).with_initializer(Initializer::Direct(vec![
                Expr::id(ID_MEMBER),
                Expr::id(opcode_name(&request.name)),
            ])),
        );

        let mut body = vec![Statement::Declaration(builder)];
        if !request.arguments.is_empty() {
            body.push(Statement::expr(
                Expr::id(BUILDER).member("add").call(argument_names(&request.arguments)),
            ));
        }
        body.push(Statement::expr(Expr::id(SOCKET_MEMBER).member("write").call(vec![
            Expr::id(BUILDER).member("data").call(Vec::new()),
            Expr::id(BUILDER).member("size").call(Vec::new()),
        ])));

        Function::new(
            Some(DeclSpecifierSeq::of_type(VOID.clone())),
            request.name.as_str(),
            argument_parameters(&request.arguments),
        )
        .with_statements(body)
    }

    /// `virtual void <event>(args) { if (<event>_cb) { <event>_cb(args); } }`
    pub(super) fn event_method(&self, event: &Message) -> Function {
        let callback = callback_member_name(&event.name);
        let invoke = Statement::expr(Expr::id(callback.as_str()).call(argument_names(&event.arguments)));

        Function::new(
            Some(
                DeclSpecifierSeq::new()
                    .with(Specifier::Virtual)
                    .with(Specifier::Type(VOID.clone())),
            ),
            event.name.as_str(),
            argument_parameters(&event.arguments),
        )
        .with_statement(Statement::if_then(Expr::id(callback), Statement::block(vec![invoke])))
    }

    /// `void dispatch(wire::wire_op_t op, wire::WireBufferParser &body)` with one case per event.
    pub(super) fn dispatcher(&self, interface: &Interface) -> Function {
        let parameters = ParameterList::from(vec![
            Parameter::new(DeclSpecifierSeq::of_type(WIRE_OP.clone()), Declarator::id(OPCODE_PARAM)),
            Parameter::new(
                DeclSpecifierSeq::of_type(BUFFER_PARSER.clone()),
                Declarator::lvalue_ref(BODY_PARAM),
            ),
        ]);

        let cases = interface.events.iter().map(dispatch_case).collect();

        Function::new(Some(DeclSpecifierSeq::of_type(VOID.clone())), DISPATCH, parameters)
            .with_statement(Statement::switch(Expr::id(OPCODE_PARAM), Statement::block(cases)))
    }

    /// `auto id() { return id_; }`
    pub(super) fn id_accessor(&self) -> Function {
        Function::new(Some(DeclSpecifierSeq::of_type(AUTO.clone())), "id", ParameterList::new())
            .with_statement(Statement::return_(Some(Expr::id(ID_MEMBER))))
    }
}

/// `case <event>_op: { [auto [a_v, ...] = body.parse<...>();] <event>(...); break; }`
fn dispatch_case(event: &Message) -> Statement {
    let mut statements = Vec::new();
    let mut call_args = Vec::new();

    if !event.arguments.is_empty() {
        let locals: Vec<String> = event
            .arguments
            .iter()
            .map(|argument| parsed_local_name(&argument.name))
            .collect();
        let parse = Expr::id(BODY_PARAM)
            .member("parse")
            .call_templated(argument_types(&event.arguments), Vec::new());
        let binding = InitDeclarator::new(Declarator::StructuredBinding(
            locals.iter().map(|local| local.as_str().into()).collect(),
        ))
        .with_initializer(Initializer::Copy(parse));
        statements.push(Statement::Declaration(SimpleDeclaration::new(
            DeclSpecifierSeq::of_type(AUTO.clone()),
            binding,
        )));
        call_args = locals.into_iter().map(Expr::id).collect();
    }

    statements.push(Statement::expr(Expr::id(event.name.as_str()).call(call_args)));
    statements.push(Statement::break_());

    Statement::case(Expr::id(opcode_name(&event.name)), Statement::block(statements))
}

fn argument_names(arguments: &[Argument]) -> Vec<Expr> {
    arguments
        .iter()
        .map(|argument| Expr::id(argument.name.as_str()))
        .collect()
}
