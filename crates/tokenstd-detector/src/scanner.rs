//! Varredura estática de seletores no runtime bytecode.
//!
//! Percorre o bytecode como um fluxo linear de instruções EVM sem executar
//! nada: cada opcode ocupa um byte e instruções PUSH1..PUSH32 carregam
//! operandos imediatos que precisam ser pulados, nunca reinterpretados como
//! opcodes. Os operandos de PUSH4 são coletados como candidatos a seletor:
//! em despachantes gerados pelo Solidity são exatamente os valores comparados
//! contra os 4 primeiros bytes do calldata.

use std::collections::HashSet;
use tokenstd_core::types::Selector;

use crate::standards::ERC165_INTERFACE_ID;

const PUSH1: u8 = 0x60;
const PUSH4: u8 = 0x63;
const PUSH32: u8 = 0x7f;

/// Extrai o conjunto de seletores referenciados pelo bytecode.
///
/// Passada única em O(len), sem recursão. A sobre-aproximação é aceitável:
/// constantes PUSH4 fora do despachante apenas adicionam candidatos, e a
/// classificação verifica continência de conjuntos, não a reconstrução exata
/// do despachante. Operando truncado no fim do buffer é descartado em vez de
/// tratado como erro.
pub fn extract_selectors(code: &[u8]) -> HashSet<Selector> {
    let mut selectors = HashSet::new();
    let mut i = 0;
    while i < code.len() {
        let opcode = code[i];
        if (PUSH1..=PUSH32).contains(&opcode) {
            let n = (opcode - PUSH1 + 1) as usize;
            let end = core::cmp::min(i + 1 + n, code.len());
            if opcode == PUSH4 && end - (i + 1) == 4 {
                let mut selector = [0u8; 4];
                selector.copy_from_slice(&code[i + 1..end]);
                selectors.insert(selector);
            }
            i = end;
        } else {
            i += 1;
        }
    }
    selectors
}

/// Verifica se o bytecode referencia um seletor específico.
pub fn references_selector(code: &[u8], selector: &Selector) -> bool {
    extract_selectors(code).contains(selector)
}

/// Verifica, apenas pelo bytecode, se o contrato despacha
/// supportsInterface(bytes4). Pré-filtro barato para quem quer evitar
/// consultas de rede contra contratos sem ERC165; note que proxies por
/// delegatecall não expõem o seletor no próprio bytecode e ainda assim
/// respondem à consulta on-chain.
pub fn detects_erc165(code: &[u8]) -> bool {
    references_selector(code, &ERC165_INTERFACE_ID)
}
