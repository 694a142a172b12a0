//! Mock data store
//!
//! Seed records for offline development. Each call returns a fresh copy.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use shared::models::{
    Caixa, Categoria, Garcom, Papel, Pedido, Produto, StatusPedido, Turno, Usuario,
};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<NaiveDateTime> {
    date(y, m, d).and_then(|day| day.and_hms_opt(h, min, 0))
}

fn placeholder(text: &str) -> Option<String> {
    Some(format!("https://via.placeholder.com/150?text={text}"))
}

pub fn produtos() -> Vec<Produto> {
    vec![
        Produto {
            id: Some(1),
            nome: "Chopp Premium".into(),
            descricao: Some("Chopp gelado artesanal premium".into()),
            preco: Decimal::new(1590, 2),
            categoria: Categoria::Bebida,
            disponivel: true,
            imagem_url: placeholder("Chopp"),
        },
        Produto {
            id: Some(2),
            nome: "Batata Frita".into(),
            descricao: Some("Batata frita crocante com sal grosso".into()),
            preco: Decimal::new(2250, 2),
            categoria: Categoria::Entrada,
            disponivel: true,
            imagem_url: placeholder("Batata"),
        },
        Produto {
            id: Some(3),
            nome: "Churrasco na Chapa".into(),
            descricao: Some("Carne bovina grelhada com acompanhamentos".into()),
            preco: Decimal::new(6500, 2),
            categoria: Categoria::PratoPrincipal,
            disponivel: true,
            imagem_url: placeholder("Churrasco"),
        },
        Produto {
            id: Some(4),
            nome: "Pudim de Leite Condensado".into(),
            descricao: Some("Pudim caseiro com calda de caramelo".into()),
            preco: Decimal::new(1200, 2),
            categoria: Categoria::Sobremesa,
            disponivel: true,
            imagem_url: placeholder("Pudim"),
        },
    ]
}

pub fn garcons() -> Vec<Garcom> {
    vec![
        Garcom {
            id: Some(1),
            nome: "João Silva".into(),
            cpf: Some("12345678901".into()),
            data_nascimento: date(1990, 5, 15),
            matricula: "GAR001".into(),
            salario: Decimal::new(250000, 2),
            turno: Turno::Manha,
            ativo: true,
        },
        Garcom {
            id: Some(2),
            nome: "Maria Santos".into(),
            cpf: Some("98765432101".into()),
            data_nascimento: date(1985, 3, 20),
            matricula: "GAR002".into(),
            salario: Decimal::new(260000, 2),
            turno: Turno::Tarde,
            ativo: true,
        },
        Garcom {
            id: Some(3),
            nome: "Pedro Costa".into(),
            cpf: Some("55555555555".into()),
            data_nascimento: date(1992, 7, 10),
            matricula: "GAR003".into(),
            salario: Decimal::new(245000, 2),
            turno: Turno::Noite,
            ativo: false,
        },
    ]
}

pub fn pedidos() -> Vec<Pedido> {
    let garcons = garcons();
    let pedido = |id: i64,
                  mesa: i32,
                  garcom: &Garcom,
                  at: Option<NaiveDateTime>,
                  total: Decimal,
                  status: StatusPedido,
                  obs: &str| Pedido {
        id: Some(id),
        numero_mesa: mesa,
        garcom_id: garcom.id,
        garcom: Some(garcom.clone()),
        data_pedido: at,
        valor_total: total,
        status,
        observacoes: Some(obs.to_string()),
    };
    vec![
        pedido(
            1,
            5,
            &garcons[0],
            datetime(2025, 11, 13, 19, 30),
            Decimal::new(12540, 2),
            StatusPedido::Entregue,
            "Sem cebola",
        ),
        pedido(
            2,
            3,
            &garcons[1],
            datetime(2025, 11, 13, 20, 0),
            Decimal::new(9890, 2),
            StatusPedido::Pago,
            "Cliente VIP",
        ),
        pedido(
            3,
            8,
            &garcons[0],
            datetime(2025, 11, 13, 20, 15),
            Decimal::new(15670, 2),
            StatusPedido::EmPreparo,
            "",
        ),
    ]
}

pub fn caixas() -> Vec<Caixa> {
    vec![
        Caixa {
            id: Some(1),
            nome: "Carlos Operador".into(),
            cpf: Some("11111111111".into()),
            data_nascimento: date(1988, 9, 12),
            codigo: "CX001".into(),
            salario: Decimal::new(280000, 2),
            total_vendido: Decimal::new(542050, 2),
            ativo: true,
        },
        Caixa {
            id: Some(2),
            nome: "Ana Gerente".into(),
            cpf: Some("22222222222".into()),
            data_nascimento: date(1986, 2, 28),
            codigo: "CX002".into(),
            salario: Decimal::new(320000, 2),
            total_vendido: Decimal::new(893075, 2),
            ativo: true,
        },
    ]
}

pub fn usuarios() -> Vec<Usuario> {
    vec![
        Usuario {
            id: Some(1),
            nome: "Admin User".into(),
            cpf: Some("33333333333".into()),
            data_nascimento: date(1980, 1, 1),
            email: "admin@cervejaria.com".into(),
            senha: None,
            papel: Papel::Admin,
            ativo: true,
        },
        Usuario {
            id: Some(2),
            nome: "Gerente Shop".into(),
            cpf: Some("44444444444".into()),
            data_nascimento: date(1985, 6, 15),
            email: "gerente@cervejaria.com".into(),
            senha: None,
            papel: Papel::Gerente,
            ativo: true,
        },
        Usuario {
            id: Some(3),
            nome: "Usuário Normal".into(),
            cpf: Some("55555555555".into()),
            data_nascimento: date(1992, 12, 20),
            email: "usuario@cervejaria.com".into(),
            senha: None,
            papel: Papel::Usuario,
            ativo: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Entity;

    #[test]
    fn test_seeds_are_valid_and_sequential() {
        fn check<T: Entity>(items: Vec<T>) {
            for (i, item) in items.iter().enumerate() {
                assert_eq!(item.id(), Some(i as i64 + 1));
                assert!(item.validate_update().is_ok());
            }
        }
        check(produtos());
        check(garcons());
        check(pedidos());
        check(caixas());
        check(usuarios());
    }

    #[test]
    fn test_pedidos_reference_seeded_garcons() {
        let ids: Vec<_> = garcons().iter().filter_map(|g| g.id).collect();
        for pedido in pedidos() {
            assert!(ids.contains(&pedido.garcom_ref().unwrap()));
            assert!(pedido.data_pedido.is_some());
        }
    }
}
