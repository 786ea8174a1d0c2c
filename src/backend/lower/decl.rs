//! Declaration lowering: callback aliases, constructors, enums and data members.

use wlcpp_protocol::{Argument, Enum, Interface, WireType};

use super::InterfaceLowering;
use super::names::{
    callback_member_name, callback_type_name, enum_type_name, escape_enumerator, is_essential, opcode_literal,
    opcode_name,
};
use super::types::{STD_STRING, SOCKET, UINT32, WIRE_OP, callback_type, wire_type_id};
use crate::backend::cpp::{
    DeclSpecifierSeq, Declarator, EnumSpecifier, Expr, Function, InitDeclarator, Initializer, MemberInitializer,
    Parameter, ParameterList, SimpleDeclaration, Specifier, TypeAlias, TypeId,
};

pub(super) const SOCKET_MEMBER: &str = "sock";
pub(super) const ID_MEMBER: &str = "id_";
pub(super) const NAME_MEMBER: &str = "name_";
const INTERFACE_CONSTANT: &str = "interface";
const NULL_ID: &str = "0x0";

impl InterfaceLowering<'_> {
    /// `using <event>_cb_t = callback_t<...>;` for every event.
    pub(super) fn callback_aliases(&self, interface: &Interface) -> Vec<TypeAlias> {
        interface
            .events
            .iter()
            .map(|event| TypeAlias {
                name: callback_type_name(&event.name).into(),
                ty: callback_type(&event.arguments),
            })
            .collect()
    }

    /// The default constructor and, for interfaces with events, the callback constructor.
    pub(super) fn constructors(&self, interface: &Interface) -> Vec<Function> {
        let essential = is_essential(&interface.name);

        let socket = Parameter::new(
            DeclSpecifierSeq::of_type(SOCKET.clone()),
            Declarator::lvalue_ref(SOCKET_MEMBER),
        );
        let id = Parameter::new(
            DeclSpecifierSeq::of_type(wire_type_id(WireType::Object).clone()),
            Declarator::id(ID_MEMBER),
        );
        let name = Parameter::new(
            DeclSpecifierSeq::of_type(wire_type_id(WireType::Uint).clone()),
            Declarator::rvalue_ref(NAME_MEMBER),
        )
        .with_default(Expr::literal(NULL_ID));

        let mut initializers = vec![
            MemberInitializer::direct(SOCKET_MEMBER, Expr::id(SOCKET_MEMBER)),
            MemberInitializer::direct(ID_MEMBER, Expr::id(ID_MEMBER)),
        ];
        if !essential {
            initializers.push(MemberInitializer::direct(NAME_MEMBER, Expr::id(NAME_MEMBER)));
        }

        let mut parameters = ParameterList::from(vec![
            socket.clone(),
            id.clone().with_default(Expr::literal(NULL_ID)),
        ]);
        if !essential {
            parameters.push(name.clone());
        }
        let default_ctor = Function::new(None, interface.name.as_str(), parameters)
            .with_initializers(initializers.clone());

        if interface.events.is_empty() {
            return vec![default_ctor];
        }

        let mut parameters = ParameterList::from(vec![socket, id]);
        for event in &interface.events {
            let member = callback_member_name(&event.name);
            parameters.push(Parameter::new(
                DeclSpecifierSeq::of_type(TypeId::new(callback_type_name(&event.name))),
                Declarator::rvalue_ref(member.as_str()),
            ));
            initializers.push(MemberInitializer::direct(member.as_str(), Expr::id(member.as_str())));
        }
        if !essential {
            parameters.push(name);
        }
        let callback_ctor =
            Function::new(None, interface.name.as_str(), parameters).with_initializers(initializers);

        vec![default_ctor, callback_ctor]
    }

    /// `enum class <name>_e : uint32_t { ... };`
    pub(super) fn lower_enum(&self, e: &Enum) -> EnumSpecifier {
        e.entries.iter().fold(
            EnumSpecifier::new(enum_type_name(&e.name)).with_base(UINT32.clone()),
            |specifier, entry| specifier.with_entry(escape_enumerator(&entry.name), Expr::literal(entry.value.as_str())),
        )
    }

    /// Protected data members: opcodes, socket, object id, registry name, callbacks.
    pub(super) fn fields(&self, interface: &Interface) -> Vec<SimpleDeclaration> {
        let mut fields = Vec::new();

        // Requests and events are numbered independently.
        for messages in [&interface.requests, &interface.events] {
            for (opcode, message) in messages.iter().enumerate() {
                fields.push(opcode_constant(&message.name, opcode));
            }
        }

        fields.push(field(SOCKET.clone(), Declarator::lvalue_ref(SOCKET_MEMBER)));
        fields.push(field(
            wire_type_id(WireType::Object).clone(),
            Declarator::id(ID_MEMBER),
        ));
        if !is_essential(&interface.name) {
            fields.push(field(wire_type_id(WireType::Uint).clone(), Declarator::id(NAME_MEMBER)));
        }
        for event in &interface.events {
            fields.push(field(
                TypeId::new(callback_type_name(&event.name)),
                Declarator::id(callback_member_name(&event.name)),
            ));
        }

        fields
    }

    /// `const std::string interface = "<name>";`
    pub(super) fn interface_constant(&self, interface: &Interface) -> SimpleDeclaration {
        SimpleDeclaration::new(
            DeclSpecifierSeq::new()
                .with(Specifier::Const)
                .with(Specifier::Type(STD_STRING.clone())),
            InitDeclarator::new(Declarator::id(INTERFACE_CONSTANT))
                .with_initializer(Initializer::Copy(Expr::string(interface.name.as_str()))),
        )
    }
}

/// `static constexpr wire::wire_op_t <name>_op = 0x..;`
fn opcode_constant(message: &str, opcode: usize) -> SimpleDeclaration {
    SimpleDeclaration::new(
        DeclSpecifierSeq::new()
            .with(Specifier::Static)
            .with(Specifier::Constexpr)
            .with(Specifier::Type(WIRE_OP.clone())),
        InitDeclarator::new(Declarator::id(opcode_name(message)))
            .with_initializer(Initializer::Copy(Expr::literal(opcode_literal(opcode)))),
    )
}

fn field(ty: TypeId, declarator: Declarator) -> SimpleDeclaration {
    SimpleDeclaration::new(DeclSpecifierSeq::of_type(ty), declarator)
}

/// One by-value parameter per argument, declared with its wire type.
pub(super) fn argument_parameters(arguments: &[Argument]) -> ParameterList {
    arguments
        .iter()
        .map(|argument| {
            Parameter::new(
                DeclSpecifierSeq::of_type(wire_type_id(argument.wire_type).clone()),
                Declarator::id(argument.name.as_str()),
            )
        })
        .collect::<Vec<_>>()
        .into()
}
